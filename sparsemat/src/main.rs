use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sparsemat::{
    execute, load_matrix, render_info, render_result, DuplicatePolicy, Operation, OutputFormat,
    PromptSession, ReaderConfig, Request, SparseMatrix,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract and multiply sparse integer matrices stored as entry lists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Sum repeated coordinates instead of keeping the last value
    #[arg(long, global = true)]
    sum_duplicates: bool,

    /// Reject entries outside the declared rows/cols
    #[arg(long, global = true)]
    bounds_check: bool,

    /// Read files into memory instead of memory-mapping them
    #[arg(long, global = true)]
    no_mmap: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add(Operands),
    /// Subtract the second matrix from the first
    Subtract(Operands),
    /// Multiply the first matrix by the second
    Multiply(Operands),
    /// Ask for the operation and file paths on the terminal
    Interactive,
    /// Show dimensions and sparsity of a matrix file
    Info {
        /// Matrix file
        path: PathBuf,
    },
}

#[derive(Args)]
struct Operands {
    /// Left operand file
    lhs: PathBuf,
    /// Right operand file
    rhs: PathBuf,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        let duplicates = if self.sum_duplicates {
            DuplicatePolicy::Sum
        } else {
            DuplicatePolicy::Overwrite
        };
        ReaderConfig::default()
            .with_duplicates(duplicates)
            .with_bounds_check(self.bounds_check)
            .with_mmap(!self.no_mmap)
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.reader_config();
    let format = cli.output_format();

    let (op, operands) = match cli.command {
        Some(Commands::Add(operands)) => (Operation::Add, operands),
        Some(Commands::Subtract(operands)) => (Operation::Subtract, operands),
        Some(Commands::Multiply(operands)) => (Operation::Multiply, operands),
        Some(Commands::Info { path }) => {
            let matrix: SparseMatrix = load_matrix(&path, &config)?;
            render_info(io::stdout().lock(), &matrix).context("failed to print matrix info")?;
            return Ok(());
        }
        Some(Commands::Interactive) | None => {
            let stdin = io::stdin().lock();
            let mut session = PromptSession::new(stdin, io::stdout().lock())
                .with_config(config)
                .with_format(format);
            session.run()?;
            return Ok(());
        }
    };

    let result = execute(&Request::new(op, operands.lhs, operands.rhs), &config)?;
    let mut stdout = io::stdout().lock();
    render_result(&mut stdout, &result, format).context("failed to print result")?;
    stdout.flush()?;
    Ok(())
}
