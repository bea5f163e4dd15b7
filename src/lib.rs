#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod job;
pub mod logging;
pub mod parameter;
pub mod provider;
pub mod version;
