pub mod main_types;
pub mod session;
