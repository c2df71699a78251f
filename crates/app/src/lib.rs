//! Shared discount domain, persistence and server plumbing.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod logging;
pub mod shutdown;

#[cfg(test)]
mod test;
