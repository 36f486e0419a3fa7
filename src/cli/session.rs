//! The interactive menu session.
//!
//! The session owns two pieces of state: the records loaded at startup
//! (never mutated) and the most recently generated report. Saving reuses
//! the cached report when one exists, so repeated saves do not recompute.
//!
//! `run` is generic over its input and output streams so menu flows can be
//! unit-tested with in-memory cursors instead of a real terminal.

use crate::core::hierarchy::team_hierarchy;
use crate::core::model::{DepartmentSummary, Employee};
use crate::core::report::generate_report;
use crate::display::{render_hierarchy, render_report};
use crate::error::ReportError;
use crate::storage::config::Config;
use crate::storage::delimited::save_report;
use crate::utils::logging::VerboseLogger;
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "Menu:\n  1. Show the team hierarchy\n  2. Show the department summary report\n  3. Save the department summary report to a file\n  Type 'exit' to quit";

/// Write `prompt`, then read one trimmed line. `None` means end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt showing a default value; an empty entry selects the default.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> io::Result<Option<String>> {
    let answer = prompt_line(input, output, &format!("{} (Enter: {}): ", prompt, default))?;
    Ok(answer.map(|line| {
        if line.is_empty() {
            default.to_string()
        } else {
            line
        }
    }))
}

pub struct Session {
    records: Vec<Employee>,
    report: Option<Vec<DepartmentSummary>>,
    delimiter: char,
    report_file_default: String,
    logger: VerboseLogger,
}

impl Session {
    pub fn new(records: Vec<Employee>, config: &Config, verbose: bool) -> Self {
        Self {
            records,
            report: None,
            delimiter: config.delimiter(),
            report_file_default: config.report_file().to_string(),
            logger: VerboseLogger::new(verbose),
        }
    }

    /// The menu loop. Ends on `exit` or end of input. Report and save
    /// failures are printed and the loop continues; only stream errors
    /// propagate.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            writeln!(output, "{}", MENU)?;
            let Some(choice) = prompt_line(&mut input, &mut output, "Select a menu option: ")?
            else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    write!(output, "{}", render_hierarchy(&team_hierarchy(&self.records)))?;
                }
                "2" => match generate_report(&self.records) {
                    Ok(report) => {
                        write!(output, "{}", render_report(&report))?;
                        self.report = Some(report);
                    }
                    Err(err) => writeln!(output, "Error: {}", err)?,
                },
                "3" => self.handle_save(&mut input, &mut output)?,
                "exit" => break,
                _ => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn handle_save<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let Some(path) =
            prompt_with_default(input, output, "Report file name", &self.report_file_default)?
        else {
            return Ok(());
        };

        let delimiter = self.delimiter;
        let report = match self.ensure_report() {
            Ok(report) => report,
            Err(err) => {
                writeln!(output, "Error: {}", err)?;
                return Ok(());
            }
        };

        match save_report(report, Path::new(&path), delimiter) {
            Ok(()) => writeln!(output, "Report saved to {}", path)?,
            Err(err) => writeln!(output, "Error: {}", err)?,
        }
        Ok(())
    }

    /// Cache-or-compute branch on the cached-report field.
    fn ensure_report(&mut self) -> Result<&[DepartmentSummary], ReportError> {
        if self.report.is_none() {
            self.logger.log("No cached report, generating");
            self.report = Some(generate_report(&self.records)?);
        } else {
            self.logger.log("Reusing cached report");
        }
        Ok(self.report.as_deref().unwrap_or_default())
    }
}
