//! Knowledge compilation flow
//!
//! Orchestrates the whole run: locate the project root, discover frontend
//! files under the target folders, and write the tree diagram, summary, and
//! every file's content into one aggregate document.

use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::category::categorize;
use crate::core::file_reader::read_content;
use crate::core::paths::relative_display;
use crate::scan::discover::{discover_files, merge_groups, sort_groups, total_files, FileGroups};
use crate::scan::locate::find_project_root;
use crate::tree::FileTree;

/// Default name of the aggregate document, written to the working directory
pub const OUTPUT_FILE: &str = "Complete Frontend Knowledge.txt";

/// Folders searched directly under the project root
pub const TARGET_FOLDERS: [&str; 2] = ["@oskit", "src"];

/// Options for a compilation run
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory where the root search starts
    pub start_dir: PathBuf,
    /// Destination of the aggregate document
    pub output: PathBuf,
    /// Suppress per-file progress lines
    pub quiet: bool,
}

/// Fatal failures of a run.
///
/// The only run-aborting condition is an unwritable output destination; a
/// partial output file may exist after a write failure and is not cleaned up.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("could not create output file '{path}': {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing to '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a run ended.
///
/// Only output-write failures are errors; both "not found" outcomes end the
/// run normally with an informational message and no output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Compiled(usize),
    RootNotFound,
    NoFilesFound,
}

/// Run the full discovery-and-aggregation pipeline
pub fn run_compile(opts: &CompileOptions) -> Result<CompileStatus, CompileError> {
    println!("Starting compilation of all frontend files...");

    let Some(project_root) = find_project_root(&opts.start_dir) else {
        println!("Could not find a directory containing '@oskit' or 'src' folders.");
        println!("Please make sure the target project is accessible from the current location.");
        return Ok(CompileStatus::RootNotFound);
    };

    println!("Found project directory: {}", project_root.display());

    let mut groups = FileGroups::new();
    for folder_name in TARGET_FOLDERS {
        let folder = project_root.join(folder_name);
        if !folder.exists() {
            println!(
                "{}",
                format!("Folder '{}' not found in project directory, skipping...", folder_name)
                    .yellow()
            );
            continue;
        }

        println!("Searching in folder: {}", folder.display());
        let found = discover_files(&folder);
        let folder_total = total_files(&found);
        merge_groups(&mut groups, found);
        println!("Found {} frontend files in {}", folder_total, folder_name);
    }

    if groups.is_empty() {
        println!("No frontend files found in the specified folders.");
        return Ok(CompileStatus::NoFilesFound);
    }

    // Per-folder results concatenate on merge; restore global order per group
    sort_groups(&mut groups);
    let total = total_files(&groups);

    println!("Total files found: {}", total);
    println!("File breakdown:");
    for (ext, files) in &groups {
        println!("  {}: {} files", ext, files.len());
    }
    println!("Compiling to: {}", opts.output.display());

    let file = File::create(&opts.output).map_err(|source| CompileError::CreateOutput {
        path: opts.output.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    write_document(&mut out, &groups, &project_root, total, opts.quiet)
        .and_then(|_| out.flush())
        .map_err(|source| CompileError::WriteOutput {
            path: opts.output.clone(),
            source,
        })?;

    println!(
        "{}",
        format!(
            "Successfully compiled {} files to '{}'",
            total,
            opts.output.display()
        )
        .green()
    );

    Ok(CompileStatus::Compiled(total))
}

/// Write the three document sections: tree diagram, summary, file contents
fn write_document<W: Write>(
    out: &mut W,
    groups: &FileGroups,
    project_root: &Path,
    total: usize,
    quiet: bool,
) -> io::Result<()> {
    // Section 1: file structure diagram
    writeln!(out, "Complete Frontend File Structure Diagram")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    let tree = FileTree::from_groups(groups, project_root);
    out.write_all(tree.render().as_bytes())?;
    writeln!(out, "\n{}\n", "=".repeat(80))?;

    // Section 2: per-category summary
    writeln!(out, "File Summary by Type")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out)?;
    for (ext, files) in groups {
        writeln!(out, "{} ({}): {} files", categorize(ext), ext, files.len())?;
    }
    writeln!(out, "\nTotal: {} files", total)?;
    writeln!(out, "\n{}\n", "=".repeat(80))?;

    // Section 3: file contents grouped by extension, in sorted-key order
    let mut file_count = 0usize;
    for (ext, files) in groups {
        writeln!(out, "=== {} Files ({}) ===", categorize(ext), ext)?;
        writeln!(out, "{}", "=".repeat(50))?;
        writeln!(out)?;

        for file_path in files {
            file_count += 1;
            if !quiet {
                println!(
                    "Processing file {}/{}: {}",
                    file_count,
                    total,
                    file_path.display()
                );
            }

            let relative = relative_display(file_path, project_root);
            writeln!(out, "*> [{}]", relative)?;
            writeln!(out, "{}", "*".repeat(20))?;
            writeln!(out)?;

            out.write_all(read_content(file_path).as_bytes())?;

            writeln!(out, "\n\n{}\n", "-".repeat(50))?;
        }

        writeln!(out, "\n{}\n", "=".repeat(80))?;
    }

    Ok(())
}
