//! JSONL issue feed I/O.
//!
//! Each line is one complete `Issue` in the dashboard's camelCase format.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{CivicError, Result};
use crate::model::Issue;

/// Load issues from a JSONL file, preserving line order.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Io` if it cannot be read,
/// or `JsonlParse` if any non-blank line is invalid.
pub fn load(path: &Path) -> Result<Vec<Issue>> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CivicError::FileNotFound(path.to_path_buf())
        } else {
            CivicError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut issues = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let issue: Issue = serde_json::from_str(trimmed).map_err(|e| CivicError::JsonlParse {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        issues.push(issue);
    }

    tracing::debug!(path = %path.display(), count = issues.len(), "loaded issue feed");
    Ok(issues)
}

/// Save issues to a JSONL file with atomic write.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save(path: &Path, issues: &[Issue]) -> Result<()> {
    let tmp_path = path.with_extension("jsonl.tmp");
    let mut file = fs::File::create(&tmp_path)?;

    for issue in issues {
        let json = serde_json::to_string(issue)?;
        writeln!(file, "{json}")?;
    }

    file.flush()?;
    drop(file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_issues;

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.jsonl");

        save(&path, sample_issues()).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), 8);
        assert_eq!(loaded[4].id, "ISS-005");
        assert_eq!(loaded[4], sample_issues()[4]);
        assert!(!dir.path().join("issues.jsonl.tmp").exists());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/issues.jsonl"));
        assert!(matches!(result, Err(CivicError::FileNotFound(_))));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blanks.jsonl");
        let json = serde_json::to_string(&sample_issues()[0]).unwrap();
        fs::write(&path, format!("\n{json}\n\n")).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        let json = serde_json::to_string(&sample_issues()[0]).unwrap();
        fs::write(&path, format!("{json}\n{{\"id\": \"ISS-999\"}}\n")).unwrap();

        match load(&path) {
            Err(CivicError::JsonlParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
