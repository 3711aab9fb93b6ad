mod app;
pub mod config;
mod effects;
pub mod logging;
mod notify;
mod timer;
mod ui;

pub use app::run_app;
