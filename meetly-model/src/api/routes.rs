macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared across Meetly services
pub mod v1 {
    pub const ROOT: &str = "/api/v1";

    pub mod users {
        pub const CURRENT_PROFILE: &str = v1_path!("/users/me/profile");
    }

    pub mod profile_options {
        pub const REGIONS: &str = v1_path!("/profile/options/regions");
        pub const EVENT_TYPES: &str = v1_path!("/profile/options/event-types");
    }
}

/// Unversioned operational endpoints.
pub mod system {
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
}

/// Strips the version prefix so a path can be registered on a nested router.
pub fn relative_to_v1(path: &'static str) -> &'static str {
    path.strip_prefix(v1::ROOT).unwrap_or(path)
}
