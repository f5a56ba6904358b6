//! Headless profile form
//!
//! Runs the profile screen's operations against an injected
//! [`UserProfileService`] without a window. Notifications land in an owned
//! [`ToastManager`] instead of an overlay.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use profile_config::{ClientConfig, UpdatePayloadMode};

use super::avatar::{self, ImagePreview, ImageSelection, PreviewApplied, PreviewError};
use super::state::{FieldError, FormData, ProfileState};
use super::validation::ValidationError;
use crate::domains::ui::feedback_ui::{Notification, ToastManager};
use crate::infra::errors::ApiError;
use crate::infra::services::UserProfileService;

/// Result of [`ProfileForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent.
    Rejected(ValidationError),
    /// The server refused the update or could not be reached.
    Failed(ApiError),
    /// The update was accepted; the record has been re-fetched.
    Updated { message: String },
}

#[derive(Debug)]
pub struct ProfileForm {
    service: Arc<dyn UserProfileService>,
    target_user: String,
    state: ProfileState,
    toasts: ToastManager,
}

impl ProfileForm {
    pub fn new(
        service: Arc<dyn UserProfileService>,
        target_user: impl Into<String>,
        payload_mode: UpdatePayloadMode,
        toast_duration: Duration,
    ) -> Self {
        Self {
            service,
            target_user: target_user.into(),
            state: ProfileState::new(payload_mode),
            toasts: ToastManager::new(toast_duration),
        }
    }

    pub fn from_config(
        service: Arc<dyn UserProfileService>,
        config: &ClientConfig,
    ) -> Self {
        Self::new(
            service,
            config.username.clone(),
            config.update_payload,
            config.toast_duration,
        )
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn form_data(&self) -> &FormData {
        &self.state.form
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn target_user(&self) -> &str {
        &self.target_user
    }

    fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// Fetch the configured user and populate the form.
    ///
    /// Failures are surfaced as an error toast and returned; the form keeps
    /// its previous contents.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.state.begin_load();
        let result = self.service.fetch_user(&self.target_user).await;
        let error = result.as_ref().err().cloned();
        if let Some(notification) = self.state.apply_loaded(result) {
            self.notify(notification);
        }
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Merge one field edit by name (`firstName`, `mobileNumber`, ...).
    pub fn on_field_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        self.state.set_field_by_name(name, value.into())
    }

    /// Record a picked file. The returned ticket identifies the decode that
    /// belongs to this pick.
    pub fn begin_image_change(&mut self, path: impl Into<PathBuf>) -> ImageSelection {
        self.state.avatar.select(path.into())
    }

    /// Deliver a decode result for an earlier pick.
    pub fn complete_image_change(
        &mut self,
        generation: u64,
        result: Result<ImagePreview, PreviewError>,
    ) -> PreviewApplied {
        let applied = self.state.avatar.apply_preview(generation, result);
        if let PreviewApplied::Failed(err) = &applied {
            self.notify(Notification::warning(err.to_string()));
        }
        applied
    }

    /// Pick `path` and decode it into the preview.
    pub async fn on_image_change(&mut self, path: impl Into<PathBuf>) -> PreviewApplied {
        let selection = self.begin_image_change(path);
        let result = avatar::decode_preview(selection.path.clone()).await;
        self.complete_image_change(selection.generation, result)
    }

    /// Check the current form; a failure is also shown as an error toast.
    pub fn validate(&mut self) -> bool {
        match self.state.validate() {
            Ok(()) => true,
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                false
            }
        }
    }

    /// Validate, send the update and, on success, reload the record.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = match self.state.begin_submit() {
            Ok(pending) => pending,
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                return SubmitOutcome::Rejected(err);
            }
        };

        let result = self
            .service
            .update_user(&pending.username, &pending.request)
            .await;
        let error = result.as_ref().err().cloned();
        let resolution = self.state.finish_submit(result);
        let message = resolution.notification.message.clone();
        self.notify(resolution.notification);

        if let Some(err) = error {
            return SubmitOutcome::Failed(err);
        }
        if resolution.reload {
            // A failed refresh is already reported by load().
            let _ = self.load().await;
        }
        SubmitOutcome::Updated { message }
    }
}
