//! Reading and writing the `;`-delimited corporate summary format.
//!
//! Input files are UTF-8 with a header line naming fields. Field values are
//! taken verbatim; only the header is interpreted at load time, so malformed
//! rows surface later during report generation.

use crate::core::model::{
    DepartmentSummary, Employee, FIELD_DEPARTMENT, FIELD_SALARY, FIELD_TEAM, REPORT_FIELDS,
};
use crate::error::{LoadError, StorageError};
use std::fs;
use std::path::Path;

/// Default field delimiter of both the input and the report format.
pub const DEFAULT_DELIMITER: char = ';';

/// Positions of the required fields within a header line.
struct HeaderLayout {
    department: usize,
    team: usize,
    salary: usize,
}

impl HeaderLayout {
    fn parse(header: &str, delimiter: char, path: &str) -> Result<Self, LoadError> {
        let fields: Vec<&str> = header.split(delimiter).map(str::trim).collect();
        let position = |name: &str| {
            fields
                .iter()
                .position(|field| *field == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_string(),
                    column: name.to_string(),
                })
        };
        Ok(Self {
            department: position(FIELD_DEPARTMENT)?,
            team: position(FIELD_TEAM)?,
            salary: position(FIELD_SALARY)?,
        })
    }
}

/// Load employee records, preserving input row order.
///
/// The only errors the caller must handle are a missing or unreadable file
/// and a header that does not name the required fields. Values themselves
/// are not validated here.
pub fn load_records(path: &Path, delimiter: char) -> Result<Vec<Employee>, LoadError> {
    let display_path = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::FileNotFound { path: display_path });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display_path.clone(),
        source,
    })?;

    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| LoadError::EmptyFile {
        path: display_path.clone(),
    })?;
    let layout = HeaderLayout::parse(header, delimiter, &display_path)?;

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(delimiter).collect();
        let field = |index: usize| fields.get(index).copied().unwrap_or_default().to_string();
        records.push(Employee {
            department: field(layout.department),
            team: field(layout.team),
            salary: field(layout.salary),
        });
    }

    Ok(records)
}

/// Write the report as delimited text: a header line naming the summary
/// fields, then one line per department in the input order. Whole-file
/// rewrite; nothing is appended.
pub fn save_report(
    report: &[DepartmentSummary],
    path: &Path,
    delimiter: char,
) -> Result<(), StorageError> {
    let mut content = REPORT_FIELDS.join(&delimiter.to_string());
    content.push('\n');
    for summary in report {
        content.push_str(&summary.to_row().join(&delimiter.to_string()));
        content.push('\n');
    }

    fs::write(path, content).map_err(|source| StorageError::FileIo {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "Департамент;Отдел;Оклад\nA;X;100\nA;Y;300\nB;X;200\n";

    fn write_sample(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sample file");
        path
    }

    #[test]
    fn test_load_preserves_row_order() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_sample(&dir, "data.csv", SAMPLE);

        let records = load_records(&path, DEFAULT_DELIMITER).expect("Failed to load records");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].department, "A");
        assert_eq!(records[0].team, "X");
        assert_eq!(records[0].salary, "100");
        assert_eq!(records[2].department, "B");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = load_records(Path::new("/nonexistent/data.csv"), DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_sample(&dir, "empty.csv", "");
        let err = load_records(&path, DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(err, LoadError::EmptyFile { .. }));
    }

    #[test]
    fn test_load_missing_required_column() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_sample(&dir, "bad.csv", "Департамент;Отдел\nA;X\n");
        let err = load_records(&path, DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { ref column, .. } if column == FIELD_SALARY
        ));
    }

    #[test]
    fn test_load_skips_blank_lines_and_tolerates_short_rows() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_sample(&dir, "gaps.csv", "Департамент;Отдел;Оклад\nA;X;100\n\nB;Y\n");

        let records = load_records(&path, DEFAULT_DELIMITER).expect("Failed to load records");
        assert_eq!(records.len(), 2);
        // Missing trailing field loads as empty; it fails later in the
        // aggregator, not here.
        assert_eq!(records[1].salary, "");
    }

    #[test]
    fn test_load_reorders_columns_by_header() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_sample(&dir, "shuffled.csv", "Оклад;Департамент;Отдел\n100;A;X\n");

        let records = load_records(&path, DEFAULT_DELIMITER).expect("Failed to load records");
        assert_eq!(records[0].department, "A");
        assert_eq!(records[0].team, "X");
        assert_eq!(records[0].salary, "100");
    }

    #[test]
    fn test_save_then_reload_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.csv");
        let report = vec![
            DepartmentSummary {
                department: "A".to_string(),
                headcount: 2,
                min_salary: 100,
                max_salary: 300,
                average_salary: 200.0,
            },
            DepartmentSummary {
                department: "B".to_string(),
                headcount: 1,
                min_salary: 200,
                max_salary: 200,
                average_salary: 200.0,
            },
        ];

        save_report(&report, &path, DEFAULT_DELIMITER).expect("Failed to save report");

        let content = fs::read_to_string(&path).expect("Failed to read saved report");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Департамент;Численность;Вилка зарплат;Средняя зарплата");
        assert_eq!(lines[1], "A;2;100 – 300;200.0");
        assert_eq!(lines[2], "B;1;200 – 200;200.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_save_to_invalid_path() {
        let report = vec![DepartmentSummary {
            department: "A".to_string(),
            headcount: 1,
            min_salary: 100,
            max_salary: 100,
            average_salary: 100.0,
        }];
        let err = save_report(
            &report,
            Path::new("/nonexistent/dir/report.csv"),
            DEFAULT_DELIMITER,
        )
        .unwrap_err();
        assert!(matches!(err, StorageError::FileIo { .. }));
    }
}
