//! CLI commands built on the content store

pub mod list;
pub mod paths;
pub mod show;
