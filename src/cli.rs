//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::compile::{self, CompileOptions, CompileStatus};

/// frontpack - compile frontend sources into one knowledge document.
#[derive(Parser, Debug)]
#[command(name = "frontpack")]
#[command(
    author,
    version,
    about,
    long_about = r#"frontpack discovers frontend source files (TypeScript, JavaScript, React,
CSS, SCSS, Sass, LESS, Vue, Svelte) under the conventional '@oskit' and 'src'
folders and compiles them into a single text document:

1. a box-drawing diagram of the discovered file layout
2. a per-category file count summary
3. every file's content, grouped by exact extension

The project root is located automatically: the first directory (starting at
--root, then its descendants in sorted order) that directly contains an
'@oskit' or 'src' entry.

Examples:
    frontpack
    frontpack --root ~/work/webapp
    frontpack --output /tmp/frontend.txt --quiet
"#
)]
pub struct Cli {
    /// Directory where the project root search starts.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory where the project root search starts (defaults to the current\n\
directory).\n\n\
The search checks ROOT itself first, then all of its subdirectories in sorted\n\
order, and stops at the first directory containing '@oskit' or 'src'."
    )]
    pub root: PathBuf,

    /// Destination of the aggregate document.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Destination of the aggregate document.\n\n\
Defaults to 'Complete Frontend Knowledge.txt' in the working directory. The\n\
file is created or truncated; a write failure aborts the run with a nonzero\n\
exit status."
    )]
    pub output: Option<PathBuf>,

    /// Quiet mode (no per-file progress lines).
    #[arg(
        short,
        long,
        long_help = "Suppress the per-file 'Processing file i/N' progress lines.\n\
Stage and summary messages are still printed."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored console output. This is useful when piping to files or\n\
when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    print_banner();

    // Get absolute root path
    let start_dir = cli.root.canonicalize().unwrap_or(cli.root);
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(compile::OUTPUT_FILE));

    let opts = CompileOptions {
        start_dir,
        output,
        quiet: cli.quiet,
    };

    // "Nothing found" outcomes exit zero; only output-write failures bubble up
    let _status: CompileStatus = compile::run_compile(&opts)?;
    Ok(())
}

fn print_banner() {
    println!("Complete Frontend Knowledge Compiler");
    println!("{}", "=".repeat(50));
    println!(
        "Searching for: TypeScript, JavaScript, React, CSS, SCSS, Sass, LESS, Vue, Svelte files"
    );
    println!("{}", "=".repeat(50));

    if let Ok(current_dir) = env::current_dir() {
        println!("Running from: {}", current_dir.display());
    }
}
