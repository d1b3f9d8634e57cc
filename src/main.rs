mod collect;
mod config;
mod render;
mod types;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::Path;

use crate::types::FileEntry;

/// File paths used by `--list` mode, relative to the invocation directory.
static FIXED_FILES: &[&str] = &[
    "backend/src/models/ApplicationSettings.ts",
    "backend/src/routes/settings.ts",
    "backend/src/routes/laneRates.ts",
    "backend/src/routes/accessorialTypes.ts",
];

fn main() -> Result<()> {
    let matches = Command::new("c2md")
        .version("0.1.0")
        .about("c2md: merges matching source files from a directory tree into a single markdown file.")
        .arg(
            Arg::new("folder")
                .help("Folder path to scan")
                .required_unless_present("list"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output markdown file name (default: source_extract.md)")
                .required(false),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Aggregate the built-in file list instead of scanning a folder")
                .conflicts_with("folder")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or(config::DEFAULT_OUTPUT);
    let debug_mode = matches.get_flag("debug");

    // Optional YAML config extends the fixed filter tables.
    let loaded = config::load_config_file()?;
    let mut user_ignores: Vec<String> = Vec::new();
    let mut included_exts: Vec<String> = config::INCLUDED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(ref c) = loaded {
        user_ignores.extend(c.ignore_patterns.clone());
        included_exts.extend(
            c.extra_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string()),
        );
    }

    let files: Vec<FileEntry> = if matches.get_flag("list") {
        let mut kept = Vec::new();
        for entry in collect::collect_from_list(FIXED_FILES) {
            if entry.path.is_file() {
                kept.push(entry);
            } else {
                eprintln!("[!] Skipping missing file: {}", entry.rel_path);
            }
        }
        kept
    } else if let Some(folder) = matches.get_one::<String>("folder") {
        let root = Path::new(folder);
        if !root.is_dir() {
            eprintln!("Invalid folder path: {}", root.display());
            return Ok(());
        }
        collect::collect(
            root,
            config::EXCLUDED_DIRS,
            &included_exts,
            &user_ignores,
            debug_mode,
        )
    } else {
        // clap enforces the positional unless --list was given
        Vec::new()
    };

    if files.is_empty() {
        eprintln!("No matching files found.");
        return Ok(());
    }

    render::render(&files, Path::new(output))?;
    println!("Markdown file created at: {}", output);
    Ok(())
}
