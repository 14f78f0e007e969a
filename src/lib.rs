pub mod api;
pub mod config;
pub mod controllers;
pub mod notify;
pub mod schemas;
pub mod session;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use config::ApiConfig;
pub use notify::{Notice, NoticeSender, Severity, notice_channel};
pub use session::Session;
