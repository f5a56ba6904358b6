//! Domain modules for the profile editor
//!
//! Each domain owns its state and an update function; they talk to each
//! other only through [`CrossDomainEvent`](crate::common::messages::CrossDomainEvent).

pub mod profile;
pub mod ui;

/// Domain registry that holds all domain states
#[derive(Debug)]
pub struct DomainRegistry {
    pub profile: profile::ProfileDomain,
    pub ui: ui::UIDomain,
}
