//! pathpick library
//!
//! Exposes modules for testing

pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod terminal;
pub mod ui;
pub mod utils;

pub use app::App;
