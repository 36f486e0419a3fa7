pub mod hierarchy;
pub mod model;
pub mod report;
