use crate::core::model::{DepartmentSummary, Employee};
use crate::error::ReportError;
use std::collections::BTreeMap;

/// Running salary statistics for one department partition.
#[derive(Debug)]
struct SalaryStats {
    count: usize,
    min: i64,
    max: i64,
    sum: i64,
}

impl SalaryStats {
    fn new() -> Self {
        Self {
            count: 0,
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
        }
    }

    fn record(&mut self, salary: i64) {
        self.count += 1;
        self.min = self.min.min(salary);
        self.max = self.max.max(salary);
        self.sum += salary;
    }
}

/// Partition records by department and compute per-department statistics.
///
/// Returns summaries in ascending lexicographic department order. A salary
/// field that does not parse as an integer fails the whole attempt with
/// [`ReportError::InvalidSalary`]; the caller's state is left untouched.
pub fn generate_report(records: &[Employee]) -> Result<Vec<DepartmentSummary>, ReportError> {
    let mut groups: BTreeMap<&str, SalaryStats> = BTreeMap::new();

    for record in records {
        let salary =
            record
                .salary
                .trim()
                .parse::<i64>()
                .map_err(|_| ReportError::InvalidSalary {
                    department: record.department.clone(),
                    value: record.salary.clone(),
                })?;
        groups
            .entry(record.department.as_str())
            .or_insert_with(SalaryStats::new)
            .record(salary);
    }

    Ok(groups
        .into_iter()
        .map(|(department, stats)| DepartmentSummary {
            department: department.to_string(),
            headcount: stats.count,
            min_salary: stats.min,
            max_salary: stats.max,
            average_salary: stats.sum as f64 / stats.count as f64,
        })
        .collect())
}
