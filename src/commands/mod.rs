pub mod config;
pub mod edit;
pub mod guess;
pub mod panel;
pub mod resolve;
