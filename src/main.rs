use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bfcase::capacity::{parse_capacity, MemoryEstimate, Scheme, DEFAULT_PROGRAM_CAPACITY};
use bfcase::programs::Demo;
use bfcase::report::alphabet_table;

#[derive(Parser, Debug)]
#[command(name = "bfcase")]
#[command(about = "Brainfuck to Verilog program-memory case tables", long_about = None)]
#[command(version)]
struct Cli {
  /// Log level (error, warn, info, debug, trace)
  #[arg(long, global = true, default_value = "warn")]
  log_level: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Emit a `case (iptr)` block that loads the program into memory
  Generate {
    /// Input file (use '-' or omit for stdin)
    input: Option<PathBuf>,

    /// Spaces before every emitted line
    #[arg(short, long, default_value_t = 4)]
    indent: usize,

    /// Reject characters that are neither instructions nor whitespace
    #[arg(long)]
    strict: bool,

    /// Write the block here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use a built-in program (hello, nested) instead of an input file
    #[arg(long, conflicts_with = "input")]
    demo: Option<Demo>,
  },

  /// Estimate the memory an interpreter core needs
  Estimate {
    /// Program capacity in instructions, e.g. 30000, 0x8000, 32K, 2^15-1
    #[arg(long, value_parser = parse_capacity)]
    prog_len: Option<u64>,

    /// Data capacity in cells (defaults to the program capacity)
    #[arg(long, value_parser = parse_capacity)]
    data_len: Option<u64>,

    /// Storage layout: packed or byte
    #[arg(long, default_value_t = Scheme::Packed)]
    scheme: Scheme,
  },

  /// List the instruction alphabet and its codes
  Alphabet,
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
  let use_stdin = match &input {
    None => true,
    Some(path) => path.to_str() == Some("-"),
  };

  match input {
    Some(path) if !use_stdin => fs::read_to_string(&path)
      .with_context(|| format!("failed to read '{}'", path.display())),
    _ => {
      let mut buffer = String::new();
      io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
      Ok(buffer)
    }
  }
}

fn generate(
  input: Option<PathBuf>,
  indent: usize,
  strict: bool,
  output: Option<PathBuf>,
  demo: Option<Demo>,
) -> Result<()> {
  let source = match demo {
    Some(demo) => {
      log::info!("Using the built-in '{}' program", demo);
      demo.source().to_string()
    }
    None => read_input(input)?,
  };

  let (text, length) = if strict {
    bfcase::generate_strict(&source, indent)?
  } else {
    bfcase::generate(&source, indent)
  };

  match output {
    Some(path) => {
      fs::write(&path, &text).with_context(|| format!("failed to write '{}'", path.display()))?;
      log::info!("Wrote {} case entries to {}", length, path.display());
    }
    None => {
      io::stdout().write_all(text.as_bytes()).context("failed to write to stdout")?;
    }
  }

  log::info!("Set the PROG_LEN parameter to {} in your module declaration.", length);
  Ok(())
}

fn estimate(prog_len: Option<u64>, data_len: Option<u64>, scheme: Scheme) -> Result<()> {
  let prog_len = prog_len.unwrap_or(DEFAULT_PROGRAM_CAPACITY);
  let data_len = data_len.unwrap_or(prog_len);

  let estimate = MemoryEstimate::new(prog_len, data_len, scheme)?;
  println!("{}", estimate);
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  env_logger::Builder::new()
    .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
    .parse_default_env()
    .init();

  match cli.command {
    Command::Generate { input, indent, strict, output, demo } => {
      generate(input, indent, strict, output, demo)
    }
    Command::Estimate { prog_len, data_len, scheme } => estimate(prog_len, data_len, scheme),
    Command::Alphabet => {
      alphabet_table().printstd();
      Ok(())
    }
  }
}
