//! Path stitching: minimal-jump connectors between consecutive contours.
//!
//! The table's ball cannot lift, so every transit between contours is
//! drawn. Travel along geometry that is (or will be) part of the
//! drawing costs nothing visually; fresh "jump" segments cost their
//! length. The stitcher builds a proximity graph over all placed
//! geometry and finds, for each transition, the path that minimizes
//! total jump length first and total path length second.
//!
//! Nodes live in a flat arena indexed by `usize`; a bit-exact
//! coordinate key deduplicates points shared between contours. Edges
//! are plain data and always symmetric.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use sandpath_core::Point;
use tracing::{debug, trace};

/// One directed half of a symmetric graph edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Arena index of the neighboring node.
    pub target: usize,
    /// True for a fresh transit segment, false for drawn geometry.
    pub is_jump: bool,
    /// Euclidean length, zero for non-jump edges.
    pub jump_distance: f64,
}

/// A node in the stitch graph.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub x: f64,
    pub y: f64,
    /// Outgoing edges. The matching reverse edge always exists on the
    /// target node with the same tag and weight.
    pub neighbors: Vec<Edge>,
}

impl GraphNode {
    fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Bit-exact coordinate key for node deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CoordKey {
    x_bits: u64,
    y_bits: u64,
}

impl CoordKey {
    fn from_point(p: Point) -> Self {
        Self {
            x_bits: p.x.to_bits(),
            y_bits: p.y.to_bits(),
        }
    }
}

/// The connector returned for one transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Connector {
    /// Intermediate points between the transition's endpoints. Empty
    /// when the endpoints are adjacent in the graph or no path exists.
    pub points: Vec<Point>,
    /// Total length of jump edges along the connector.
    pub jump_cost: f64,
}

/// Growing proximity graph over placed contour geometry.
#[derive(Debug)]
pub struct StitchGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<CoordKey, usize>,
    /// Nodes below this index already carry their K-nearest jump edges.
    jump_wired: usize,
    fanout: usize,
}

impl StitchGraph {
    /// Create an empty graph with the given jump-edge fan-out (K).
    #[must_use]
    pub fn new(fanout: usize) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            jump_wired: 0,
            fanout,
        }
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a contour's points, linking consecutive points with
    /// zero-cost edges.
    pub fn add_contour(&mut self, points: &[Point]) {
        let mut prev: Option<usize> = None;
        for &p in points {
            let idx = self.get_or_insert(p);
            if let Some(prev_idx) = prev {
                if prev_idx != idx {
                    self.link(prev_idx, idx, false, 0.0);
                }
            }
            prev = Some(idx);
        }
    }

    /// Connect the end of one contour to the start of the next with
    /// minimal jump travel.
    ///
    /// The transition endpoints are injected as nodes (wired to their
    /// K nearest neighbors), the lexicographic shortest path is found,
    /// and the traversed connector becomes drawn geometry available to
    /// later stitches at zero cost.
    ///
    /// Returns an empty connector when no path exists.
    pub fn stitch(&mut self, from: Point, to: Point) -> Connector {
        let src = self.get_or_insert(from);
        let dst = self.get_or_insert(to);
        self.wire_pending_jumps();

        if src == dst {
            return Connector::default();
        }

        let Some((path, jump_cost)) = self.search(src, dst) else {
            debug!("no stitch path found, contours left adjacent");
            return Connector::default();
        };

        // The connector is now drawn: downgrade its edges to zero-cost
        // travel for future transitions.
        let path_points: Vec<Point> = path.iter().map(|&i| self.nodes[i].point()).collect();
        self.add_contour(&path_points);

        trace!(
            nodes = path.len(),
            jump_cost,
            "stitched transition"
        );

        let interior = if path.len() > 2 {
            path_points[1..path.len() - 1].to_vec()
        } else {
            Vec::new()
        };

        Connector {
            points: interior,
            jump_cost,
        }
    }

    /// Look up or create the node for a point.
    fn get_or_insert(&mut self, p: Point) -> usize {
        let key = CoordKey::from_point(p);
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(GraphNode {
            x: p.x,
            y: p.y,
            neighbors: Vec::new(),
        });
        self.index.insert(key, idx);
        idx
    }

    /// Insert a symmetric edge, deduplicating against existing edges.
    ///
    /// A non-jump link between already-jump-connected nodes downgrades
    /// the existing edge: once geometry is drawn, travel along it is
    /// free.
    fn link(&mut self, a: usize, b: usize, is_jump: bool, jump_distance: f64) {
        if let Some(existing) = self.nodes[a].neighbors.iter().position(|e| e.target == b) {
            if !is_jump && self.nodes[a].neighbors[existing].is_jump {
                self.nodes[a].neighbors[existing].is_jump = false;
                self.nodes[a].neighbors[existing].jump_distance = 0.0;
                if let Some(rev) = self.nodes[b].neighbors.iter().position(|e| e.target == a) {
                    self.nodes[b].neighbors[rev].is_jump = false;
                    self.nodes[b].neighbors[rev].jump_distance = 0.0;
                }
            }
            return;
        }
        self.nodes[a].neighbors.push(Edge {
            target: b,
            is_jump,
            jump_distance,
        });
        self.nodes[b].neighbors.push(Edge {
            target: a,
            is_jump,
            jump_distance,
        });
    }

    /// Wire K-nearest jump edges for every node added since the last
    /// stitch.
    ///
    /// Candidate selection is a full O(n) scan per node. Documented
    /// hotspot: fine at hobby-scale point budgets, and a grid or k-d
    /// tree drop-in must not change the selected neighbor set.
    fn wire_pending_jumps(&mut self) {
        for idx in self.jump_wired..self.nodes.len() {
            let nearest = self.k_nearest(idx);
            let p = self.nodes[idx].point();
            for other in nearest {
                let d = p.distance(self.nodes[other].point());
                self.link(idx, other, true, d);
            }
        }
        self.jump_wired = self.nodes.len();
    }

    /// Indices of the K nearest other nodes, ties broken by index for
    /// determinism.
    fn k_nearest(&self, idx: usize) -> Vec<usize> {
        let p = self.nodes[idx].point();
        let mut candidates: Vec<(f64, usize)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != idx)
            .map(|(i, n)| (p.distance_squared(n.point()), i))
            .collect();
        candidates.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        candidates
            .into_iter()
            .take(self.fanout)
            .map(|(_, i)| i)
            .collect()
    }

    /// Lexicographic shortest path: primary key is cumulative jump
    /// length, secondary key is cumulative path length.
    ///
    /// Returns the node path from `src` to `dst` and its jump cost, or
    /// `None` when `dst` is unreachable.
    fn search(&self, src: usize, dst: usize) -> Option<(Vec<usize>, f64)> {
        let n = self.nodes.len();
        let mut best: Vec<(f64, f64)> = vec![(f64::INFINITY, f64::INFINITY); n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        best[src] = (0.0, 0.0);
        heap.push(HeapEntry {
            jump: 0.0,
            length: 0.0,
            node: src,
        });

        while let Some(HeapEntry { jump, length, node }) = heap.pop() {
            if node == dst {
                break;
            }
            if lex_gt((jump, length), best[node]) {
                continue; // stale entry
            }

            let here = self.nodes[node].point();
            for edge in &self.nodes[node].neighbors {
                let step = here.distance(self.nodes[edge.target].point());
                let next = (
                    jump + if edge.is_jump { edge.jump_distance } else { 0.0 },
                    length + step,
                );
                if lex_lt(next, best[edge.target]) {
                    best[edge.target] = next;
                    prev[edge.target] = Some(node);
                    heap.push(HeapEntry {
                        jump: next.0,
                        length: next.1,
                        node: edge.target,
                    });
                }
            }
        }

        if best[dst].0.is_infinite() {
            return None;
        }

        // Reconstruct by walking the predecessor chain backwards.
        let mut path = vec![dst];
        let mut cursor = dst;
        while let Some(p) = prev[cursor] {
            path.push(p);
            cursor = p;
        }
        path.reverse();
        debug_assert_eq!(path[0], src);

        Some((path, best[dst].0))
    }
}

fn lex_lt(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 < b.0 || (a.0 == b.0 && a.1 < b.1)
}

fn lex_gt(a: (f64, f64), b: (f64, f64)) -> bool {
    lex_lt(b, a)
}

/// Min-heap entry ordered by (jump, length), then node index for
/// deterministic tie-breaking.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    jump: f64,
    length: f64,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest cost.
        other
            .jump
            .partial_cmp(&self.jump)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .length
                    .partial_cmp(&self.length)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.node.cmp(&self.node))
    }
}
