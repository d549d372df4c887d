//! # Meetly Core
//!
//! Domain logic and persistence for Meetly user profiles.
//!
//! - [`profile`]: the stored profile entity and its client view
//! - [`update`]: validation of partial updates into a typed change set
//! - [`database`]: the repository port plus PostgreSQL and in-memory adapters
//! - [`service`]: read/update use cases composed over the repository
//!
//! Localization tables live in `meetly-model`; this crate only ever stores
//! canonical enumeration keys.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod database;
pub mod error;
pub mod profile;
pub mod service;
pub mod update;

pub use error::{ProfileError, Result};
pub use profile::UserProfile;
pub use service::ProfileService;
pub use update::{FieldUpdate, ProfileChanges};

pub use meetly_model as model;

#[cfg(feature = "database")]
#[cfg_attr(docsrs, doc(cfg(feature = "database")))]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
