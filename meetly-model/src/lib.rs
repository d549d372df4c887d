//! Core data model definitions shared across Meetly crates.
//!
//! Everything in here is pure data: the localized enumerations stored on a
//! user profile, the option entries served to pickers, and the wire shapes of
//! the profile endpoints. Nothing touches the database or the network.

#![allow(missing_docs)]

pub mod api;
pub mod event_type;
pub mod gender;
pub mod localized;
pub mod options;
pub mod profile;
pub mod region;

pub use api::{ApiResponse, ErrorResponse};
pub use event_type::EventType;
pub use gender::Gender;
pub use localized::Localized;
pub use options::OptionEntry;
pub use profile::{ProfileUpdateRequest, ProfileView};
pub use region::Region;
