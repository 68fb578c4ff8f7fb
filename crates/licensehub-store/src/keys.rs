//! Key names of the persisted credential record.
//!
//! Centralising the names keeps the session writer and any external
//! reader of the store in agreement.

/// Key holding the bearer token.
pub const TOKEN: &str = "token";

/// Key holding the role tag (`client` or `admin`).
pub const ROLE: &str = "userRole";

/// Key holding the JSON-serialized user info record.
pub const USER_INFO: &str = "userInfo";

/// Every key of the credential record, in write order.
pub const ALL: [&str; 3] = [TOKEN, ROLE, USER_INFO];
