//! Data shapes exchanged with the user profile API.
//!
//! The API speaks camelCase JSON. Fetches are wrapped in a `{ "user": .. }`
//! envelope; updates answer with a bare `{ "message": .. }` object on both
//! the success and the error path.
#![allow(missing_docs)]

pub mod routes;
pub mod update;
pub mod user;

pub use update::{MessageResponse, UpdateUserRequest};
pub use user::{UserEnvelope, UserRecord};
