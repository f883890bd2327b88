//! Resolves the ordered list of files to migrate.

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{Config, is_glob_pattern};

/// Resolve `entries` (or the configured `files`, or a walk of the source
/// root) to relative paths under `source_root`.
///
/// Literal entries are kept as given even if they do not exist, so they can
/// be reported as not found. Glob entries and walked files are sorted and
/// filtered through `ignores`. Duplicates keep their first position.
pub fn resolve_files(
    source_root: &Path,
    config: &Config,
    entries: &[String],
    verbose: bool,
) -> Result<Vec<String>> {
    let entries = if entries.is_empty() {
        config.files.as_slice()
    } else {
        entries
    };

    let ignores: Vec<Pattern> = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<_>>()?;

    let mut files: Vec<String> = Vec::new();
    if entries.is_empty() {
        files.extend(walk_source_root(source_root, &config.extensions, &ignores, verbose));
    }

    for entry in entries {
        if !is_glob_pattern(entry) {
            files.push(entry.clone());
            continue;
        }

        let full_pattern = source_root.join(entry);
        let mut matched: Vec<String> = glob(&full_pattern.to_string_lossy())
            .with_context(|| format!("Invalid glob pattern in 'files': \"{}\"", entry))?
            .flatten()
            .filter(|path| path.is_file())
            .filter_map(|path| relative_to(source_root, &path))
            .filter(|relative| !is_ignored(&ignores, relative))
            .collect();
        matched.sort();

        if matched.is_empty() && verbose {
            eprintln!(
                "{} Pattern matched no files: {}",
                "warning:".bold().yellow(),
                entry
            );
        }
        files.extend(matched);
    }

    let mut seen = HashSet::new();
    files.retain(|file| seen.insert(file.clone()));
    Ok(files)
}

fn walk_source_root(
    source_root: &Path,
    extensions: &[String],
    ignores: &[Pattern],
    verbose: bool,
) -> Vec<String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
        if !entry.file_type().is_file() || !has_extension {
            continue;
        }

        if let Some(relative) = relative_to(source_root, path)
            && !is_ignored(ignores, &relative)
        {
            files.push(relative);
        }
    }

    files
}

/// Relative path with `/` separators.
fn relative_to(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

fn is_ignored(ignores: &[Pattern], relative: &str) -> bool {
    ignores.iter().any(|pattern| {
        pattern.matches(relative) || pattern.matches(&format!("./{}", relative))
    })
}
