//! Guide loading
//!
//! Reads guide markdown from disk and runs it through the parser. A guide
//! that cannot be read is reported and treated as "no document available";
//! the parser itself never fails.

use crate::guide_model::{self, Document, Markers};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors that can occur while loading guides
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read guide {path}: {source}", path = .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {path}: {source}", path = .path.display())]
    WalkError {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A guide parsed from a file
#[derive(Debug, Clone)]
pub struct ParsedGuide {
    /// Source file
    pub path: PathBuf,

    /// Parsed document
    pub document: Document,
}

/// Read the raw text of a guide
pub fn read_guide(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a single guide
///
/// # Returns
/// * `Some(Document)` - The parsed guide
/// * `None` - The guide could not be read (the failure is logged)
pub fn load_document(path: &Path, markers: &Markers) -> Option<Document> {
    match read_guide(path) {
        Ok(text) => Some(guide_model::parse_with_markers(&text, markers)),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

/// Discover all markdown guides below `root`, sorted by file name
pub fn collect_guides(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut guides = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::WalkError {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md") {
            guides.push(path.to_path_buf());
        }
    }

    Ok(guides)
}

/// Parse every guide below `root`
///
/// # Parameters
/// * `root` - Directory containing guide markdown files
/// * `markers` - Marker vocabulary to recognize
///
/// # Returns
/// * `Ok(Vec<ParsedGuide>)` - Parsed guides, in file name order
/// * `Err(LoadError)` - The directory could not be walked or a guide could not be read
pub fn parse_guides(root: &Path, markers: &Markers) -> Result<Vec<ParsedGuide>, LoadError> {
    let paths = collect_guides(root)?;
    log::info!("Found {} guides under {}", paths.len(), root.display());

    #[cfg(feature = "parallel")]
    let guides: Result<Vec<_>, _> = paths.par_iter().map(|p| parse_guide(p, markers)).collect();

    #[cfg(not(feature = "parallel"))]
    let guides: Result<Vec<_>, _> = paths.iter().map(|p| parse_guide(p, markers)).collect();

    guides
}

/// Read and parse one guide file
fn parse_guide(path: &Path, markers: &Markers) -> Result<ParsedGuide, LoadError> {
    let text = read_guide(path)?;
    let document = guide_model::parse_with_markers(&text, markers);
    log::debug!(
        "Parsed {}: {} parts, {} hooks",
        path.display(),
        document.parts.len(),
        document.hook_count()
    );

    Ok(ParsedGuide {
        path: path.to_path_buf(),
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hookguide-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_yields_no_document() {
        let result = load_document(Path::new("/nonexistent/guide.md"), &Markers::default());

        assert!(result.is_none());
    }

    #[test]
    fn test_read_error_names_path() {
        let err = read_guide(Path::new("/nonexistent/guide.md")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/guide.md"));
    }

    #[test]
    fn test_parse_guides_in_directory() {
        // Arrange: two guides and a non-markdown file
        let dir = scratch_dir("batch");
        fs::write(dir.join("b.md"), "# Part 1\n## 1. B\nbody\n").unwrap();
        fs::write(dir.join("a.md"), "# Part 1\n## 1. A\nbody\n").unwrap();
        fs::write(dir.join("notes.txt"), "# Part 1\n## 1. T\nbody\n").unwrap();

        // Act
        let guides = parse_guides(&dir, &Markers::default()).unwrap();

        // Assert: sorted, markdown only
        assert_eq!(guides.len(), 2);
        assert!(guides[0].path.ends_with("a.md"));
        assert_eq!(guides[0].document.parts[0].hooks[0].title, "1. A");
        assert!(guides[1].path.ends_with("b.md"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_walk_error_names_failing_entry() {
        let missing = std::env::temp_dir().join(format!("hookguide-missing-{}", std::process::id()));

        let err = collect_guides(&missing).unwrap_err();

        match &err {
            LoadError::WalkError { path, .. } => assert_eq!(path, &missing),
            other => panic!("unexpected error: {}", other),
        }
        assert!(err.to_string().contains(&*missing.to_string_lossy()));
    }
}
