pub mod core;
pub mod managers;
pub mod proposals;
