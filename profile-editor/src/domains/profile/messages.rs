use std::path::PathBuf;

use profile_model::{MessageResponse, UserRecord};

use super::avatar::{ImagePreview, PreviewError};
use super::state::ProfileField;
use crate::infra::errors::ApiError;

#[derive(Clone, Debug)]
pub enum ProfileMessage {
    // Fetching
    Load,
    Loaded(Result<UserRecord, ApiError>),

    // Editing
    FieldChanged(ProfileField, String),

    // Avatar
    PickAvatar,
    AvatarPicked(Option<PathBuf>),
    PreviewDecoded(u64, Result<ImagePreview, PreviewError>),

    // Saving
    Submit,
    Submitted(Result<MessageResponse, ApiError>),

    LogoutRequested,
}

impl ProfileMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load => "Profile::Load",
            Self::Loaded(_) => "Profile::Loaded",
            Self::FieldChanged(_, _) => "Profile::FieldChanged",
            Self::PickAvatar => "Profile::PickAvatar",
            Self::AvatarPicked(_) => "Profile::AvatarPicked",
            Self::PreviewDecoded(_, _) => "Profile::PreviewDecoded",
            Self::Submit => "Profile::Submit",
            Self::Submitted(_) => "Profile::Submitted",
            Self::LogoutRequested => "Profile::LogoutRequested",
        }
    }
}
