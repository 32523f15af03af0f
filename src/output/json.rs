//! JSON report emitter.
//!
//! Each report is written pretty-printed, followed by the separator line.

use crate::report::schema::UserReport;
use crate::utils::config::REPORT_SEPARATOR;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one report and its trailing separator
///
/// **Public** - main entry point for report output
///
/// # Arguments
/// * `writer` - Destination (stdout, a file, or a buffer in tests)
/// * `report` - Report to serialize
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report<W: Write>(mut writer: W, report: &UserReport) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(OutputError::SerializationFailed)?;

    writeln!(writer)?;
    writeln!(writer, "{}", REPORT_SEPARATOR)?;
    writer.flush()?;

    Ok(())
}

/// Render a report exactly as `write_report` would emit it
///
/// **Public** - useful for tests and debugging
pub fn report_to_string(report: &UserReport) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, report)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Open a report file for appending, creating parent directories
///
/// **Public** - used when `--output` replaces stdout
///
/// # Errors
/// * `OutputError::InvalidPath` - Path empty, a directory, or parent not creatable
/// * `OutputError::WriteFailed` - File cannot be opened
pub fn open_report_file(output_path: impl AsRef<Path>) -> Result<BufWriter<File>, OutputError> {
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .map_err(OutputError::WriteFailed)?;

    Ok(BufWriter::new(file))
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_report() -> UserReport {
        UserReport {
            name: "The Octocat".to_string(),
            username: "octocat".to_string(),
            bio: String::new(),
            followers: 10,
            following: 0,
            public_repos: 1,
            language_distribution: [("Go".to_string(), 100.0)].into_iter().collect(),
            repo_forks: [("r1".to_string(), 3)].into_iter().collect(),
            activity: HashMap::from([(2020, [1, 0, 1]), (2021, [0, 1, 1])]),
        }
    }

    #[test]
    fn test_report_ends_with_separator() {
        let text = report_to_string(&create_test_report()).unwrap();

        assert!(text.starts_with("{\n  \"name\": \"The Octocat\""));
        assert!(text.ends_with("}\n-------------\n"));
    }

    #[test]
    fn test_years_render_as_object_keys() {
        let text = report_to_string(&create_test_report()).unwrap();
        let json_part = text.trim_end().trim_end_matches(REPORT_SEPARATOR);
        let value: serde_json::Value = serde_json::from_str(json_part).unwrap();

        assert_eq!(value["activity"]["2020"], serde_json::json!([1, 0, 1]));
        assert_eq!(value["repo_forks"]["r1"], 3);
        assert_eq!(value["language_distribution"]["Go"], 100.0);
    }

    #[test]
    fn test_map_keys_are_sorted() {
        let mut report = create_test_report();
        report.language_distribution = ["Rust", "C", "Go", "Python", "Assembly"]
            .iter()
            .map(|lang| (lang.to_string(), 20.0))
            .collect();
        report.activity = (2015..2025).rev().map(|year| (year, [1, 1, 2])).collect();

        let text = report_to_string(&report).unwrap();

        let positions: Vec<usize> = ["\"Assembly\"", "\"C\"", "\"Go\"", "\"Python\"", "\"Rust\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let years: Vec<usize> = (2015..2025)
            .map(|year| text.find(&format!("\"{}\"", year)).unwrap())
            .collect();
        assert!(years.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(text, report_to_string(&report.clone()).unwrap());
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_open_creates_parent_dirs_and_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/reports.txt");
        let report = create_test_report();

        write_report(open_report_file(&nested_path).unwrap(), &report).unwrap();
        write_report(open_report_file(&nested_path).unwrap(), &report).unwrap();

        let contents = std::fs::read_to_string(&nested_path).unwrap();
        assert_eq!(contents.matches(REPORT_SEPARATOR).count(), 2);
    }
}
