//! User registration and lookup service
//!
//! Exposes `POST /users`, `GET /users?id=` and the `/checkdb` probe over a
//! pluggable [`repositories::UserStore`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
pub mod workflows;

/// Embedded schema migrations for the user table
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
