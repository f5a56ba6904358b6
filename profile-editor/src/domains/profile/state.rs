//! Profile form state
//!
//! Pure state transitions shared by the desktop UI and the headless
//! [`ProfileForm`](super::form::ProfileForm). Nothing here performs I/O;
//! callers run the requests and feed the results back in.

use std::fmt;
use std::str::FromStr;

use profile_config::UpdatePayloadMode;
use profile_model::{MessageResponse, UpdateUserRequest, UserRecord};
use thiserror::Error;

use super::avatar::AvatarState;
use super::payload::build_update_request;
use super::validation::{self, ValidationError};
use crate::domains::ui::feedback_ui::Notification;
use crate::infra::errors::ApiError;

/// Email the form starts with before anything was fetched.
pub const DEFAULT_EMAIL: &str = "email@gmail.com";

/// Shown after a successful update whose response carried no message.
pub const UPDATED_FALLBACK_MESSAGE: &str = "Profile updated";

/// The editable profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            ..Self::empty()
        }
    }
}

impl FormData {
    /// Every field blank, including email.
    pub fn empty() -> Self {
        Self {
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            address: String::new(),
        }
    }

    /// Replace the whole form with a fetched record; missing values become
    /// empty strings.
    pub fn from_record(user: UserRecord) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name.unwrap_or_default(),
            last_name: user.last_name.unwrap_or_default(),
            mobile_number: user.mobile.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            address: user.address.unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::MobileNumber => &self.mobile_number,
            ProfileField::Email => &self.email,
            ProfileField::Address => &self.address,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Username => &mut self.username,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::MobileNumber => &mut self.mobile_number,
            ProfileField::Email => &mut self.email,
            ProfileField::Address => &mut self.address,
        };
        *slot = value;
    }

    /// Copy with one field replaced.
    pub fn with(&self, field: ProfileField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value.into());
        next
    }
}

/// Form fields, named after the keys the form is addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Username,
    FirstName,
    LastName,
    MobileNumber,
    Email,
    Address,
}

impl ProfileField {
    pub const EDITABLE: [ProfileField; 5] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::MobileNumber,
        ProfileField::Email,
        ProfileField::Address,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::MobileNumber => "mobileNumber",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::MobileNumber => "Mobile Number",
            Self::Email => "Email",
            Self::Address => "Address",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileField {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "username" => Ok(Self::Username),
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "mobileNumber" => Ok(Self::MobileNumber),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            other => Err(FieldError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field '{0}'")]
    Unknown(String),
    #[error("field '{0}' cannot be edited once the profile is loaded")]
    ReadOnly(ProfileField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// A validated update, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub username: String,
    pub request: UpdateUserRequest,
}

/// What to do after an update request resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResolution {
    pub notification: Notification,
    /// Re-fetch the record; only set on success.
    pub reload: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub form: FormData,
    pub load_status: LoadStatus,
    pub submit_phase: SubmitPhase,
    pub avatar: AvatarState,
    pub payload_mode: UpdatePayloadMode,
}

impl ProfileState {
    pub fn new(payload_mode: UpdatePayloadMode) -> Self {
        Self {
            payload_mode,
            ..Self::default()
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.load_status == LoadStatus::Loaded
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_phase == SubmitPhase::Submitting
    }

    /// Mark a fetch as started. A refresh of a loaded record keeps `Loaded`
    /// so the form stays interactive.
    pub fn begin_load(&mut self) {
        if self.load_status != LoadStatus::Loaded {
            self.load_status = LoadStatus::Loading;
        }
    }

    /// Apply a fetch result. Returns the notification to surface, if any.
    pub fn apply_loaded(
        &mut self,
        result: Result<UserRecord, ApiError>,
    ) -> Option<Notification> {
        match result {
            Ok(user) => {
                log::debug!("[Profile] Loaded record for '{}'", user.username);
                self.form = FormData::from_record(user);
                self.load_status = LoadStatus::Loaded;
                None
            }
            Err(err) => {
                log::warn!("[Profile] Failed to load profile: {}", err);
                if self.load_status != LoadStatus::Loaded {
                    self.load_status = LoadStatus::Failed;
                }
                Some(Notification::error(err.user_message()))
            }
        }
    }

    /// Merge a single field edit. No validation happens here.
    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: String,
    ) -> Result<(), FieldError> {
        if field == ProfileField::Username && self.is_loaded() {
            return Err(FieldError::ReadOnly(field));
        }
        self.form.set(field, value);
        Ok(())
    }

    /// Same as [`set_field`](Self::set_field), addressed by field name.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), FieldError> {
        self.set_field(name.parse()?, value)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(&self.form)
    }

    /// Validate and build the request. On success the form enters
    /// `Submitting`; on failure nothing changes.
    pub fn begin_submit(&mut self) -> Result<PendingUpdate, ValidationError> {
        self.validate()?;
        let request = build_update_request(&self.form, self.payload_mode);
        self.submit_phase = SubmitPhase::Submitting;
        Ok(PendingUpdate {
            username: self.form.username.clone(),
            request,
        })
    }

    /// Apply the outcome of an update request and return to `Idle`.
    pub fn finish_submit(
        &mut self,
        result: Result<MessageResponse, ApiError>,
    ) -> SubmitResolution {
        self.submit_phase = SubmitPhase::Idle;
        match result {
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UPDATED_FALLBACK_MESSAGE.to_string());
                log::info!("[Profile] Update response: {}", message);
                SubmitResolution {
                    notification: Notification::success(message),
                    reload: true,
                }
            }
            Err(err) => {
                log::error!("[Profile] Update error: {}", err);
                SubmitResolution {
                    notification: Notification::error(err.user_message()),
                    reload: false,
                }
            }
        }
    }
}
