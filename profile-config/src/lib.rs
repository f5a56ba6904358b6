//! Configuration for the profile editor.
//!
//! Values are composed in three layers: built-in defaults, an optional TOML
//! file, then environment variables (after `.env` has been read). The
//! resulting [`ClientConfig`] is validated once and handed to the editor.

pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod sources;
pub mod util;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader};
pub use models::{ClientConfig, UpdatePayloadMode};
pub use sources::{EnvConfig, FileConfig};
