pub mod agents;
pub mod config;
pub mod define;
pub mod helpers;
pub mod jobs;
pub mod rebuild;
pub mod remove;
pub mod resolve;
pub mod set_default;
pub mod trigger;
pub mod version;
