// Declare all modules
pub mod auth;
pub mod config;
pub mod contacts;
pub mod error;
pub mod menu;
pub mod storage;
pub mod utils;

// No re-exports here as they're handled in lib.rs
