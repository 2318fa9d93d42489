#![doc = "The `taskpad` library crate."]
#![doc = ""]
#![doc = "A task tracker API: user registration and login with bearer tokens, and"]
#![doc = "per-user task lists where every read and write is scoped to the caller."]
#![doc = "The binary (`main.rs`) loads configuration, connects the Postgres store and"]
#![doc = "serves `app::build_app`."]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod tasks;

pub use crate::app::{build_app, AppState};
pub use crate::error::AppError;
