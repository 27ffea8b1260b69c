//! Statistics about the crawl output file
//!
//! The size and line count are the primary metrics. Each non-blank line is
//! also parsed as JSON so malformed records and records missing expected
//! fields can be reported; neither affects the outcome of the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Output file summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputStats {
    /// File size on disk
    pub size_bytes: u64,

    /// Number of lines, including a final line without a newline
    pub line_count: u64,

    /// Non-blank lines that are not valid JSON
    pub malformed_lines: u64,

    /// Valid records lacking a non-empty value for a required field
    pub missing_fields: u64,
}

/// Returns the size of the output file, or `None` when it does not exist
pub fn output_size(path: &Path) -> io::Result<Option<u64>> {
    if !path.exists() {
        tracing::debug!("Output file {} does not exist", path.display());
        return Ok(None);
    }
    Ok(Some(std::fs::metadata(path)?.len()))
}

/// Reads every line of the output file
///
/// # Arguments
///
/// * `path` - The JSON-lines file written by the crawl
/// * `size_bytes` - Size already reported by [`output_size`]
/// * `required_fields` - Fields each record should carry; may be empty
///
/// # Returns
///
/// * `Ok(OutputStats)` - The file was read as UTF-8 text
/// * `Err(io::Error)` - The file could not be opened or decoded
pub fn scan_records(
    path: &Path,
    size_bytes: u64,
    required_fields: &[String],
) -> io::Result<OutputStats> {
    let reader = BufReader::new(File::open(path)?);

    let mut stats = OutputStats {
        size_bytes,
        ..Default::default()
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        stats.line_count += 1;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<serde_json::Value>(&line) {
            Ok(record) => {
                if !has_required_fields(&record, required_fields) {
                    tracing::debug!("Line {} is missing required fields", index + 1);
                    stats.missing_fields += 1;
                }
            }
            Err(e) => {
                tracing::debug!("Line {} is not valid JSON: {}", index + 1, e);
                stats.malformed_lines += 1;
            }
        }
    }

    tracing::info!(
        "Inspected {}: {} bytes, {} lines",
        path.display(),
        stats.size_bytes,
        stats.line_count
    );
    Ok(stats)
}

fn has_required_fields(record: &serde_json::Value, required_fields: &[String]) -> bool {
    required_fields.iter().all(|field| match record.get(field) {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    })
}

/// Warns that the crawl left no output file behind
pub fn print_missing_output<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    writeln!(out, "Warning: {} file was not created", path.display())
}

/// Prints the output file size, plus a warning when it is empty
pub fn print_output_size<W: Write>(path: &Path, size_bytes: u64, out: &mut W) -> io::Result<()> {
    writeln!(out, "Output file size: {} bytes", size_bytes)?;
    if size_bytes == 0 {
        writeln!(out, "Warning: {} is empty", path.display())?;
    }
    Ok(())
}

/// Prints the line count and any record problems found by [`scan_records`]
pub fn print_record_report<W: Write>(stats: &OutputStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "Number of JSON lines: {}", stats.line_count)?;

    if stats.malformed_lines > 0 {
        writeln!(out, "Malformed JSON lines: {}", stats.malformed_lines)?;
    }
    if stats.missing_fields > 0 {
        writeln!(out, "Records missing required fields: {}", stats.missing_fields)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_output(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("items.jl");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn inspect(path: &Path, required_fields: &[String]) -> OutputStats {
        let size = output_size(path).unwrap().unwrap();
        scan_records(path, size, required_fields).unwrap()
    }

    #[test]
    fn test_counts_newline_terminated_records() {
        let dir = TempDir::new().unwrap();
        let content = "{\"url\": \"a\"}\n{\"url\": \"b\"}\n{\"url\": \"c\"}\n";
        let path = write_output(&dir, content);

        let stats = inspect(&path, &[]);

        assert_eq!(stats.line_count, 3);
        assert_eq!(stats.size_bytes, content.len() as u64);
        assert_eq!(stats.malformed_lines, 0);
    }

    #[test]
    fn test_final_line_without_newline_is_counted() {
        let dir = TempDir::new().unwrap();
        let path = write_output(&dir, "{}\n{}");

        assert_eq!(inspect(&path, &[]).line_count, 2);
    }

    #[test]
    fn test_missing_file_has_no_size() {
        let dir = TempDir::new().unwrap();
        let result = output_size(&dir.path().join("items.jl")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_output(&dir, "");

        assert_eq!(inspect(&path, &[]), OutputStats::default());
    }

    #[test]
    fn test_malformed_lines_counted_but_still_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_output(&dir, "{\"ok\": 1}\nnot json\n\n{\"ok\": 2\n");

        let stats = inspect(&path, &[]);
        assert_eq!(stats.line_count, 4);
        assert_eq!(stats.malformed_lines, 2);
    }

    #[test]
    fn test_required_fields() {
        let dir = TempDir::new().unwrap();
        let content = concat!(
            "{\"url\": \"https://a\", \"text\": \"body\"}\n",
            "{\"url\": \"https://b\", \"text\": \"\"}\n",
            "{\"url\": \"https://c\"}\n",
            "{\"url\": null, \"text\": \"body\"}\n",
            "[1, 2]\n",
        );
        let path = write_output(&dir, content);
        let required = vec!["url".to_string(), "text".to_string()];

        let stats = inspect(&path, &required);
        assert_eq!(stats.line_count, 5);
        assert_eq!(stats.missing_fields, 4);
    }

    #[test]
    fn test_invalid_utf8_has_size_but_fails_scan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.jl");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        assert_eq!(output_size(&path).unwrap(), Some(3));
        assert!(scan_records(&path, 3, &[]).is_err());
    }

    #[test]
    fn test_report_for_missing_file() {
        let mut out = Vec::new();
        print_missing_output(Path::new("items.jl"), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Warning: items.jl file was not created\n"
        );
    }

    #[test]
    fn test_report_for_present_file() {
        let stats = OutputStats {
            size_bytes: 120,
            line_count: 4,
            malformed_lines: 1,
            missing_fields: 0,
        };
        let mut out = Vec::new();
        print_output_size(Path::new("items.jl"), stats.size_bytes, &mut out).unwrap();
        print_record_report(&stats, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Output file size: 120 bytes\nNumber of JSON lines: 4\nMalformed JSON lines: 1\n"
        );
    }

    #[test]
    fn test_report_warns_on_empty_file() {
        let mut out = Vec::new();
        print_output_size(Path::new("items.jl"), 0, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Warning: items.jl is empty"));
    }
}
