use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use episode_list::{convert_file, resolve_output_path, ConversionReport, ConverterConfig};

#[derive(Parser)]
#[command(name = "episode-list")]
#[command(about = "Turn a tab-delimited episode export into a start/name listing")]
#[command(version)]
struct Args {
    /// Tab-delimited export with "Name" and "Start" columns
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Output file (default: <input>_converted-<timestamp>.txt next to the input)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: Option<PathBuf>,

    /// Debug mode - show processing details on stderr
    #[arg(short, long)]
    debug: bool,
}

const USAGE: &str = "\
How to use:
  episode-list <inputFile>
                 OR
  episode-list <inputFile> <outputFile>

If the output file is omitted, a new file named
<input>_converted-<timestamp>.txt is written next to the input file.

Example:
  episode-list ~/Documents/podcasts/see_the_thing_is.tsv
                 OR
  episode-list ~/Documents/podcasts/see_the_thing_is.tsv ~/Desktop/see_the_thing_is.txt";

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Wrong argument count is not treated as a failure
                println!("{}", USAGE);
                std::process::exit(0);
            }
        },
    };

    match run(&args) {
        Ok(report) => {
            println!("Input file: {}", report.input.display());
            println!("Converted file: {}", report.output.display());
        }
        Err(e) => {
            eprintln!("episode-list: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ConversionReport> {
    let config = ConverterConfig {
        debug: args.debug,
        ..Default::default()
    };

    let output = resolve_output_path(&args.input, args.output.as_deref());

    let report = convert_file(&args.input, &output, &config)
        .with_context(|| format!("Conversion of '{}' failed", args.input.display()))?;

    if args.debug {
        let stats = &report.stats;
        eprintln!("Final statistics:");
        eprintln!("  Lines read: {}", stats.lines_read);
        eprintln!("  Lines written: {}", stats.lines_written);
        eprintln!("  Bytes written: {}", stats.bytes_written);
        eprintln!(
            "  Processing time: {}",
            humantime::format_duration(stats.processing_time)
        );
    }

    Ok(report)
}
