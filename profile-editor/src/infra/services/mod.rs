// Service abstractions consumed by the domains

pub mod user_profile;

pub use user_profile::{UserProfileApiAdapter, UserProfileService};
