use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use sandpath::{convert, init_logging, plan_preview, Contour, ConversionConfig, OutputFormat};
use tracing::info;

struct CliArgs {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<u8>,
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = parse_args()?;

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read contours from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read contours from stdin")?;
            buf
        }
    };
    let contours: Vec<Contour> =
        serde_json::from_str(&raw).context("contour input is not valid JSON")?;

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config from {}", path.display()))?;
            serde_json::from_str(&text).context("config is not valid JSON")?
        }
        None => ConversionConfig::default(),
    };
    if let Some(code) = args.format {
        config.output_format = OutputFormat::from_code(code)
            .with_context(|| format!("unknown output format code {code}"))?;
    }

    if args.trace {
        let mut snapshot = plan_preview(&contours, &config)?;
        let mut index = 0;
        while let Some(contour) = snapshot.next_contour() {
            info!(
                index,
                points = contour.len(),
                closed = contour.is_closed(),
                "planned contour"
            );
            index += 1;
        }
    }

    let result = convert(&contours, &config)?;
    info!(
        points = result.ordered_points.len(),
        final_epsilon = result.final_epsilon,
        truncated = result.truncated,
        "conversion complete"
    );

    match &args.output {
        Some(path) => fs::write(path, &result.encoded_text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", result.encoded_text),
    }

    Ok(())
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs {
        input: None,
        config: None,
        output: None,
        format: None,
        trace: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let value = iter.next().context("--config requires a path")?;
                args.config = Some(PathBuf::from(value));
            }
            "-o" | "--output" => {
                let value = iter.next().context("--output requires a path")?;
                args.output = Some(PathBuf::from(value));
            }
            "-f" | "--format" => {
                let value = iter.next().context("--format requires a code (0-3)")?;
                args.format = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid format code {value}"))?,
                );
            }
            "--trace" => args.trace = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("sandpath {} ({})", sandpath::VERSION, sandpath::BUILD_DATE);
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                anyhow::ensure!(args.input.is_none(), "more than one input file given");
                args.input = Some(PathBuf::from(other));
            }
            other => anyhow::bail!("unknown option {other}"),
        }
    }

    Ok(args)
}

fn print_usage() {
    println!(
        "Usage: sandpath [OPTIONS] [CONTOURS.json]

Converts a JSON array of contours (arrays of {{\"x\": .., \"y\": ..}} points)
into a continuous theta-rho path for a polar sand table.

Reads contours from stdin when no input file is given.

Options:
  -c, --config <PATH>   Conversion config as JSON (defaults applied per field)
  -o, --output <PATH>   Write encoded output to a file instead of stdout
  -f, --format <CODE>   Output format code 0-3, overriding the config
      --trace           Log the planned contour order before converting
  -h, --help            Show this help
  -V, --version         Show version"
    );
}
