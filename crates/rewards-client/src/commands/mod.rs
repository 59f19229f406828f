pub mod check;
pub mod common;
pub mod demo;
pub mod monthly;
pub mod summary;
pub mod transactions;
