//! Fixed-schema record types for the corporate summary format.

/// Field names of the employee data file header.
pub const FIELD_DEPARTMENT: &str = "Департамент";
pub const FIELD_TEAM: &str = "Отдел";
pub const FIELD_SALARY: &str = "Оклад";

/// Field names of the saved report header, in column order.
pub const REPORT_FIELDS: [&str; 4] = [
    "Департамент",
    "Численность",
    "Вилка зарплат",
    "Средняя зарплата",
];

/// One input row. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub department: String,
    pub team: String,
    /// Raw salary text from the input file. Parsed during report
    /// generation so a malformed value fails the report, not the load.
    pub salary: String,
}

/// Aggregated statistics for one department.
///
/// Invariants: `headcount >= 1` and `min_salary <= max_salary` — a summary
/// only exists for a department with at least one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSummary {
    pub department: String,
    pub headcount: usize,
    pub min_salary: i64,
    pub max_salary: i64,
    pub average_salary: f64,
}

impl DepartmentSummary {
    /// Salary range as displayed and persisted, e.g. `100 – 300`.
    /// A single-record department renders as `N – N`.
    pub fn salary_range(&self) -> String {
        format!("{} – {}", self.min_salary, self.max_salary)
    }

    /// Average salary at full precision. An integral mean still renders
    /// with one decimal place so the column reads as a real number.
    pub fn average_display(&self) -> String {
        if self.average_salary.fract() == 0.0 {
            format!("{:.1}", self.average_salary)
        } else {
            self.average_salary.to_string()
        }
    }

    /// Cell values matching [`REPORT_FIELDS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.department.clone(),
            self.headcount.to_string(),
            self.salary_range(),
            self.average_display(),
        ]
    }
}
