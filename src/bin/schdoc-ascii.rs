//! schdoc-ascii CLI
//!
//! Convert Protel ASCII schematic files into FileHeader record streams.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schdoc_ascii::{is_ascii_schdoc, Decoder, Encoder};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "schdoc-ascii")]
#[command(version)]
#[command(about = "Protel ASCII schematic converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert ASCII schematics to binary record streams
    Convert {
        /// Files and directories to convert
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file for a single input (default: input with .bin extension)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Convert even when detection fails
        #[arg(long)]
        force: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether files are ASCII schematics
    Detect {
        /// Files to inspect
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the records of a converted stream
    #[command(name = "t")]
    List {
        /// Record stream file to list (default: stdin)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { inputs, output, force, verbose } => {
            convert(inputs, output, force, verbose)?;
        }
        Commands::Detect { inputs, verbose } => {
            detect(inputs, verbose)?;
        }
        Commands::List { input, verbose } => {
            list_records(input, verbose)?;
        }
    }

    Ok(())
}

fn convert(inputs: Vec<PathBuf>, output: Option<PathBuf>, force: bool, verbose: bool) -> Result<()> {
    if output.is_some() && (inputs.len() > 1 || inputs[0].is_dir()) {
        anyhow::bail!("-o/--output requires a single file input");
    }

    for input in &inputs {
        if input.is_dir() {
            convert_directory(input, force, verbose)?;
        } else {
            let out_path = output
                .clone()
                .unwrap_or_else(|| input.with_extension("bin"));
            convert_file(input, &out_path, force, verbose)?;
        }
    }

    Ok(())
}

fn convert_file(input: &Path, output: &Path, force: bool, verbose: bool) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))?;

    if !is_ascii_schdoc(&data) {
        if !force {
            anyhow::bail!(
                "Not an ASCII schematic: {} (use --force to convert anyway)",
                input.display()
            );
        }
        if verbose {
            eprintln!("Warning: {} did not detect as ASCII, converting anyway", input.display());
        }
    }

    let encoder = Encoder::new();
    let stream = encoder
        .encode(&data)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    fs::write(output, &stream)
        .with_context(|| format!("Failed to write: {}", output.display()))?;

    if verbose {
        println!("Converted: {} -> {} ({} bytes)", input.display(), output.display(), stream.len());
    }

    Ok(())
}

fn convert_directory(dir: &Path, force: bool, verbose: bool) -> Result<()> {
    let entries = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect::<Vec<_>>();

    let mut converted = 0usize;
    for entry in entries {
        let path = entry.path();
        let data = fs::read(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;

        if !is_ascii_schdoc(&data) {
            if verbose {
                println!("Skipped (not ASCII): {}", path.display());
            }
            continue;
        }

        let out_path = path.with_extension("bin");
        convert_file(path, &out_path, force, verbose)?;
        converted += 1;
    }

    if verbose {
        println!("Converted {} file(s) under {}", converted, dir.display());
    }

    Ok(())
}

fn detect(inputs: Vec<PathBuf>, verbose: bool) -> Result<()> {
    for input in &inputs {
        let data = fs::read(input)
            .with_context(|| format!("Failed to read file: {}", input.display()))?;

        let verdict = if is_ascii_schdoc(&data) { "ascii" } else { "no" };
        if verbose {
            println!("{}  {}  {} bytes", input.display(), verdict, data.len());
        } else {
            println!("{}  {}", input.display(), verdict);
        }
    }

    Ok(())
}

fn list_records(input: Option<PathBuf>, verbose: bool) -> Result<()> {
    let data = if let Some(input_path) = input {
        fs::read(&input_path)
            .with_context(|| format!("Failed to read: {}", input_path.display()))?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    let decoder = Decoder::new();
    let records = decoder.decode(&data)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, record) in records.iter().enumerate() {
        let text = record.text().unwrap_or("<non-UTF-8 payload>");
        if verbose {
            writeln!(out, "{:>6}  {:>5}  {}", index, record.payload_len(), text)?;
        } else {
            writeln!(out, "{}", text)?;
        }
    }

    Ok(())
}
