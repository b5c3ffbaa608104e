//! Hostedit - parse, edit and persist hosts files.

pub mod backup;
pub mod cli;
pub mod config;
pub mod document;
pub mod edit;
pub mod entry;
pub mod error;
pub mod hosts;
pub mod platform;
pub mod store;
