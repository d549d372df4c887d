//! HTTP contract shared by the server and its clients.

pub mod responses;
pub mod routes;

pub use responses::{ApiResponse, ErrorResponse};
