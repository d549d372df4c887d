pub mod middleware;
pub mod token;

pub use middleware::{AuthenticatedUser, auth_middleware};
pub use token::{Claims, TokenKeys};
