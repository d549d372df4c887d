//! Persistence for user profiles.
//!
//! Application code depends only on the [`ports::profiles::ProfileRepository`]
//! port. The PostgreSQL adapter is the production implementation; the
//! in-memory adapter backs handler tests.

pub mod ports;

#[cfg(feature = "database")]
pub mod postgres;
#[cfg(feature = "database")]
pub mod repositories;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use ports::profiles::ProfileRepository;

#[cfg(feature = "database")]
pub use postgres::{DatabaseOptions, PostgresDatabase};
#[cfg(feature = "database")]
pub use repositories::profiles::{PROFILE_COLUMNS, PostgresProfilesRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryProfileRepository;
