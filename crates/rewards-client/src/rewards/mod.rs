pub mod period;
pub mod points;
pub mod summary;
pub mod timeline;
pub mod types;
