//! frontpack - Compile frontend sources into one knowledge document
//!
//! frontpack provides:
//! - Automatic project root location by conventional folder markers
//! - Recursive discovery of frontend files grouped by exact extension
//! - A box-drawing tree diagram of the discovered layout
//! - One aggregate document with summary and full file contents

use anyhow::Result;
use clap::Parser;

mod cli;
mod compile;
mod core;
mod scan;
mod tree;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
