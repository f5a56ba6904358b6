//! Profile editor library
//!
//! This crate contains the editor's library surfaces used by the executable
//! in `src/main.rs`: the iced application glue, the profile and UI domains,
//! and the infrastructure that talks to the user API.
//!
//! Notes
//! - [`domains::profile::ProfileForm`] drives the same state transitions as
//!   the desktop UI without a window and is what most tests exercise.
//! - Public items are subject to change; the library is exposed mainly to
//!   enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
