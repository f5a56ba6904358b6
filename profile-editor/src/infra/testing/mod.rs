//! In-process stand-ins for the profile API, used by tests and by the
//! binary's offline mode.

pub mod stubs;

pub use stubs::{StubCall, StubUserProfileService};
