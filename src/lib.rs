// src/lib.rs
pub mod banner;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod notifier;
pub mod providers;
pub mod runner;
