use crate::error::AppError;

pub mod config;
pub mod delimited;

pub type Result<T> = std::result::Result<T, AppError>;
