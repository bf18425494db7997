//! `huffc` command-line front end. Mirrors `compressor/cli.py`'s
//! `argument_parser`/`PyCompressor` surface area 1:1 (spec.md §4.9):
//! a positional filename, mutually exclusive `-c`/`-x`, an optional
//! `-d/--dest-file`, and an optional `--output-dir`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use huffc::{compress, extract};

#[derive(Parser, Debug)]
#[command(name = "huffc", version, about = "Compress or extract text files with classical Huffman coding")]
#[command(group(ArgGroup::new("action").required(true).args(["compress", "extract"])))]
struct Cli {
    /// Name of the file to process
    filename: PathBuf,

    /// Compress the file
    #[arg(short = 'c', long)]
    compress: bool,

    /// Extract the file
    #[arg(short = 'x', long)]
    extract: bool,

    /// Destination file name
    #[arg(short = 'd', long = "dest-file", value_name = "NAME")]
    dest_file: Option<PathBuf>,

    /// Directory to write the destination file under
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.compress {
        compress(&cli.filename, cli.dest_file.as_deref(), cli.output_dir.as_deref())
    } else {
        extract(&cli.filename, cli.dest_file.as_deref(), cli.output_dir.as_deref())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
