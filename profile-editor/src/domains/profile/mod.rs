//! Profile domain
//!
//! Owns the editable profile of a single user: fetching it, merging edits,
//! validating, sending updates and the local avatar preview.

pub mod avatar;
pub mod form;
pub mod messages;
pub mod payload;
pub mod state;
pub mod update;
pub mod validation;

use std::sync::Arc;

pub use self::form::{ProfileForm, SubmitOutcome};
pub use self::messages::ProfileMessage;
pub use self::state::{
    FieldError, FormData, LoadStatus, ProfileField, ProfileState, SubmitPhase,
};
pub use self::validation::ValidationError;

use crate::infra::services::UserProfileService;

pub struct ProfileDomain {
    pub state: ProfileState,
    pub service: Arc<dyn UserProfileService>,
    /// Whose record is fetched on load.
    pub target_user: String,
}

impl ProfileDomain {
    pub fn new(
        state: ProfileState,
        service: Arc<dyn UserProfileService>,
        target_user: impl Into<String>,
    ) -> Self {
        Self {
            state,
            service,
            target_user: target_user.into(),
        }
    }
}

impl std::fmt::Debug for ProfileDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileDomain")
            .field("state", &self.state)
            .field("target_user", &self.target_user)
            .finish()
    }
}
