pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Interactive menu session
pub mod core; // Aggregation and hierarchy logic
pub mod storage; // Delimited files and configuration

/// Support modules (used across layers)
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
