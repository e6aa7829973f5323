pub mod core;
pub mod managers;
