//! Dictionary filtering command
//!
//! Turns raw source lists into one-word-per-line dictionaries.

use crate::wordlists::filter_raw;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Outcome for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub name: String,
    pub words: usize,
}

/// Filter every file in `source` into a file of the same name in `dest`
///
/// Subdirectories are skipped. Files are processed in name order.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed or created, or a file
/// cannot be read or written.
pub fn filter_directory(source: &Path, dest: &Path) -> Result<Vec<FilterSummary>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(source)
        .with_context(|| format!("failed to list {}", source.display()))?
    {
        let entry = entry.with_context(|| format!("failed to list {}", source.display()))?;
        if entry.path().is_dir() {
            debug!("skipping directory {}", entry.path().display());
            continue;
        }
        files.push(entry.file_name());
    }
    files.sort();

    fs::create_dir_all(dest).with_context(|| format!("failed to create {}", dest.display()))?;

    let mut summaries = Vec::with_capacity(files.len());
    for name in files {
        let input = source.join(&name);
        let content = fs::read_to_string(&input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let words = filter_raw(&content);

        let output = dest.join(&name);
        let mut text = words.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(&output, text).with_context(|| format!("failed to write {}", output.display()))?;

        info!("filtered {} into {} words", input.display(), words.len());
        summaries.push(FilterSummary {
            name: name.to_string_lossy().into_owned(),
            words: words.len(),
        });
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_each_file() {
        let root = std::env::temp_dir().join(format!("wordle_hints_filter_{}", std::process::id()));
        let source = root.join("dicts");
        let dest = root.join("filtered");
        fs::create_dir_all(source.join("nested")).unwrap();
        fs::write(source.join("small.txt"), "header\n---\nzebra\napple\nApple\n").unwrap();
        fs::write(source.join("big.txt"), "crane\nslate\ntoo-long\n").unwrap();

        let summaries = filter_directory(&source, &dest).unwrap();
        assert_eq!(
            summaries,
            vec![
                FilterSummary {
                    name: "big.txt".to_string(),
                    words: 2
                },
                FilterSummary {
                    name: "small.txt".to_string(),
                    words: 2
                },
            ]
        );
        assert_eq!(
            fs::read_to_string(dest.join("small.txt")).unwrap(),
            "APPLE\nZEBRA\n"
        );
        assert_eq!(
            fs::read_to_string(dest.join("big.txt")).unwrap(),
            "CRANE\nSLATE\n"
        );

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_source_is_an_error() {
        let missing = Path::new("/nonexistent/wordle_hints/dicts");
        let err = filter_directory(missing, &std::env::temp_dir()).unwrap_err();
        assert!(err.to_string().contains("failed to list"));
    }
}
