//! Interactive sales-file picker.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `sales analyze` and choose a file" UX
//!
//! The picker searches for spreadsheet and CSV files under the current working directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Default directory recursion depth for finding sales files.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Extensions offered by the picker. Content, not extension, decides how a file is read.
const TABLE_EXTENSIONS: [&str; 6] = ["xlsx", "xlsm", "xlsb", "xls", "ods", "csv"];

/// Prompt the user to select a sales file from the current directory tree.
///
/// Behavior:
/// - list discovered workbook/CSV files
/// - accept either a number (from the list) or an explicit path
/// - `q` cancels
pub fn prompt_for_table_path() -> Result<PathBuf, AppError> {
    let files = discover_table_files();
    if files.is_empty() {
        return Err(AppError::new(
            2,
            "No workbook or CSV files found. Provide one with `sales analyze <file>`.",
        ));
    }

    println!("Found {} sales file(s):", files.len());
    for (idx, path) in files.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, pretty_path(path));
    }

    loop {
        print!("Select a file by number (1-{}) or type a path (q to quit): ", files.len());
        io::stdout()
            .flush()
            .map_err(|e| AppError::new(2, format!("Failed to write prompt: {e}")))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| AppError::new(2, format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::new(
                2,
                "No input received. Provide a path with `sales analyze <file>`.",
            ));
        }

        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Err(AppError::new(2, "Canceled."));
        }

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return validate_table_path(&files[choice - 1]);
            }
            println!("Invalid choice: {choice}. Enter a number between 1 and {}.", files.len());
            continue;
        }

        match validate_table_path(Path::new(input)) {
            Ok(path) => return Ok(path),
            Err(err) => println!("{err}"),
        }
    }
}

/// Validate the provided path points to an existing file.
pub fn validate_table_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::new(2, format!("File not found: {}", path.display())));
    }
    if path.is_dir() {
        return Err(AppError::new(
            2,
            format!("Expected a file, got a directory: {}", path.display()),
        ));
    }
    Ok(path.to_path_buf())
}

/// Discover sales files under the current directory (deterministic order).
pub fn discover_table_files() -> Vec<PathBuf> {
    find_table_files(Path::new("."), DEFAULT_SEARCH_DEPTH)
}

fn find_table_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_table_files_inner(root, 0, max_depth, &mut out);
    out.sort_by_key(|p| pretty_path(p));
    out
}

fn find_table_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if !should_skip_dir(&path) {
                find_table_files_inner(&path, depth + 1, max_depth, out);
            }
            continue;
        }

        if file_type.is_file() && has_table_extension(&path) {
            out.push(path);
        }
    }
}

fn has_table_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TABLE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_workbooks_and_skips_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("q1.xlsx"), b"").unwrap();
        fs::write(dir.path().join("Q2.CSV"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target").join("junk.xlsx"), b"").unwrap();

        let found: Vec<String> = find_table_files(dir.path(), 2)
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        assert_eq!(found, vec!["Q2.CSV", "q1.xlsx"]);
    }

    #[test]
    fn directory_is_not_a_table() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_table_path(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Expected a file"));
    }
}
