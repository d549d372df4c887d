//! Repository ports (interfaces). Implementations live beside them under
//! `database::repositories` and `database::memory`.

pub mod profiles;
