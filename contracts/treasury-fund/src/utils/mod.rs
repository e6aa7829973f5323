pub mod core;
pub mod splits;
