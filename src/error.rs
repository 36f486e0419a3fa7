use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("LoadError: {0}")]
    Load(#[from] LoadError),
    #[error("ReportError: {0}")]
    Report(#[from] ReportError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

/// Failures while reading the employee data file at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {path}")]
    FileNotFound { path: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Data file {path} is empty")]
    EmptyFile { path: String },
    #[error("Data file {path} has no '{column}' column")]
    MissingColumn { path: String, column: String },
}

/// Failures while generating the department summary report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid salary value '{value}' in department '{department}'")]
    InvalidSalary { department: String, value: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

impl AppError {
    /// Whether the error ends the session. Load failures leave nothing to
    /// work with; report and save failures only abort the action in progress.
    pub fn is_fatal(&self) -> bool {
        match self {
            AppError::Load(_) => true,
            AppError::Report(_) => false,
            AppError::Storage(StorageError::FileIo { .. }) => false,
            AppError::Storage(_) => true,
        }
    }
}
