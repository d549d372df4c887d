//! # Meetly Server
//!
//! HTTP surface for Meetly user profiles:
//!
//! - **Profile**: read and partially update the authenticated user's profile,
//!   translating gender between canonical keys and Chinese labels
//! - **Profile options**: static region and event-type picker lists
//! - **Operations**: `/ping` liveness and `/health` database check
//!
//! The server is built on Axum and stores profiles in PostgreSQL through the
//! repository port in `meetly-core`.

pub mod auth;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::startup::create_app;
