mod profile;

pub use profile::{StubCall, StubUserProfileService};
