pub mod grid;
pub mod tables;
