pub mod config;
pub mod context;
pub mod database;
pub mod handlers;
pub mod models;
pub mod schema;
