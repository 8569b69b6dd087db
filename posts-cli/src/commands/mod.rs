//! Command implementations for the posts CLI

pub mod serve;

pub use serve::run_serve;
