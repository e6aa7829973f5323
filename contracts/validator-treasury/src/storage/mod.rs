pub mod core;
pub mod proposals;
