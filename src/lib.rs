pub mod analytics;
pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
