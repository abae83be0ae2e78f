pub mod ads;
pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod users;
