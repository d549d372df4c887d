/// Development-only HMAC key. Rejected outside `DEV_MODE`.
pub const DEFAULT_TOKEN_KEY: &str = "change-me-meetly-token-key";

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
