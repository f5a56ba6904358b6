//! Desktop message handling tests
//!
//! Drive the root `update` with profile and feedback messages and check the
//! resulting state. Returned tasks are not executed; async results are fed
//! back in by hand the way the runtime would.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use profile_config::ClientConfig;
use profile_editor::common::messages::{CrossDomainEvent, DomainMessage};
use profile_editor::domains::profile::avatar::{
    PreviewError, decode_preview_bytes,
};
use profile_editor::domains::profile::{
    LoadStatus, ProfileField, ProfileMessage, SubmitPhase,
};
use profile_editor::domains::ui::feedback_ui::{
    FeedbackMessage, Notification, ToastLevel,
};
use profile_editor::infra::ApiError;
use profile_editor::infra::testing::stubs::StubUserProfileService;
use profile_editor::state::State;
use profile_editor::update::update;
use profile_model::{MessageResponse, UserRecord};

fn state_with(config: &ClientConfig) -> State {
    State::new(
        Arc::new(StubUserProfileService::with_demo_user("sharma")),
        config,
    )
}

fn state() -> State {
    state_with(&ClientConfig::default())
}

fn send(state: &mut State, message: impl Into<DomainMessage>) {
    let _ = update(state, message.into());
}

fn png_bytes() -> Vec<u8> {
    let img: image::ImageBuffer<image::Rgba<u8>, Vec<u8>> =
        image::ImageBuffer::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

fn loaded(state: &mut State) {
    send(state, ProfileMessage::Load);
    send(
        state,
        ProfileMessage::Loaded(Ok(UserRecord::new("sharma").with_email("a@b.com"))),
    );
}

#[tokio::test]
async fn load_marks_loading_then_populates_form() {
    let mut state = state();

    send(&mut state, ProfileMessage::Load);
    assert_eq!(state.domains.profile.state.load_status, LoadStatus::Loading);

    send(
        &mut state,
        ProfileMessage::Loaded(Ok(UserRecord::new("sharma").with_email("a@b.com"))),
    );

    let form = &state.domains.profile.state.form;
    assert_eq!(form.username, "sharma");
    assert_eq!(form.email, "a@b.com");
    assert!(form.first_name.is_empty());
    assert!(state.domains.ui.state.toast_manager.is_empty());
}

#[tokio::test]
async fn failed_load_raises_error_toast() {
    let mut state = state();

    send(&mut state, ProfileMessage::Load);
    send(
        &mut state,
        ProfileMessage::Loaded(Err(ApiError::server(404, "Not found"))),
    );

    assert_eq!(state.domains.profile.state.load_status, LoadStatus::Failed);
    assert_eq!(
        state
            .domains
            .ui
            .state
            .toast_manager
            .messages(ToastLevel::Error),
        vec!["Not found"]
    );
}

#[tokio::test]
async fn field_edits_are_merged() {
    let mut state = state();
    loaded(&mut state);

    send(
        &mut state,
        ProfileMessage::FieldChanged(ProfileField::FirstName, "Ravi".into()),
    );
    send(
        &mut state,
        ProfileMessage::FieldChanged(ProfileField::Username, "other".into()),
    );

    let form = &state.domains.profile.state.form;
    assert_eq!(form.first_name, "Ravi");
    assert_eq!(form.username, "sharma");
    assert_eq!(form.email, "a@b.com");
}

#[tokio::test]
async fn invalid_submit_toasts_and_stays_idle() {
    let mut state = state();
    loaded(&mut state);
    send(
        &mut state,
        ProfileMessage::FieldChanged(ProfileField::Email, "broken".into()),
    );

    send(&mut state, ProfileMessage::Submit);

    assert_eq!(state.domains.profile.state.submit_phase, SubmitPhase::Idle);
    assert_eq!(
        state
            .domains
            .ui
            .state
            .toast_manager
            .latest()
            .map(|t| t.message.as_str()),
        Some("Please enter a valid email address")
    );
}

#[tokio::test]
async fn submit_cycle_reports_result() {
    let mut state = state();
    loaded(&mut state);

    send(&mut state, ProfileMessage::Submit);
    assert!(state.domains.profile.state.is_submitting());

    send(
        &mut state,
        ProfileMessage::Submitted(Ok(MessageResponse::new("Updated"))),
    );
    assert!(!state.domains.profile.state.is_submitting());
    assert_eq!(
        state
            .domains
            .ui
            .state
            .toast_manager
            .messages(ToastLevel::Success),
        vec!["Updated"]
    );

    send(&mut state, ProfileMessage::Submit);
    send(
        &mut state,
        ProfileMessage::Submitted(Err(ApiError::server(500, "Database down"))),
    );
    assert_eq!(
        state
            .domains
            .ui
            .state
            .toast_manager
            .messages(ToastLevel::Error),
        vec!["Database down"]
    );
}

#[tokio::test]
async fn decoded_preview_updates_avatar_handle() {
    let mut state = state();

    send(
        &mut state,
        ProfileMessage::AvatarPicked(Some(PathBuf::from("/tmp/one.png"))),
    );
    send(
        &mut state,
        ProfileMessage::AvatarPicked(Some(PathBuf::from("/tmp/two.png"))),
    );
    let current = state.domains.profile.state.avatar.current_generation();

    send(
        &mut state,
        ProfileMessage::PreviewDecoded(
            current - 1,
            decode_preview_bytes(png_bytes()),
        ),
    );
    assert!(state.domains.ui.state.avatar_handle.is_none());

    send(
        &mut state,
        ProfileMessage::PreviewDecoded(current, decode_preview_bytes(png_bytes())),
    );
    assert!(state.domains.ui.state.avatar_handle.is_some());
    assert!(state.domains.profile.state.avatar.preview.is_some());
}

#[tokio::test]
async fn failed_preview_warns() {
    let mut state = state();
    send(
        &mut state,
        ProfileMessage::AvatarPicked(Some(PathBuf::from("/tmp/notes.txt"))),
    );
    let current = state.domains.profile.state.avatar.current_generation();

    send(
        &mut state,
        ProfileMessage::PreviewDecoded(current, Err(PreviewError::UnsupportedFormat)),
    );

    assert!(state.domains.ui.state.avatar_handle.is_none());
    assert_eq!(
        state
            .domains
            .ui
            .state
            .toast_manager
            .messages(ToastLevel::Warning),
        vec!["Unsupported image format"]
    );
}

#[tokio::test]
async fn dismissed_toast_is_removed() {
    let mut state = state();
    send(
        &mut state,
        DomainMessage::Event(CrossDomainEvent::Notify(Notification::info("hi"))),
    );
    let id = state.domains.ui.state.toast_manager.toasts[0].id;

    send(&mut state, FeedbackMessage::DismissToast(id));

    assert!(state.domains.ui.state.toast_manager.is_empty());
}

#[tokio::test]
async fn expired_toasts_are_pruned() {
    let config = ClientConfig {
        toast_duration: Duration::ZERO,
        ..ClientConfig::default()
    };
    let mut state = state_with(&config);
    send(&mut state, FeedbackMessage::ShowToast(Notification::error("gone")));
    assert_eq!(state.domains.ui.state.toast_manager.len(), 1);

    send(&mut state, FeedbackMessage::PruneExpired);

    assert!(state.domains.ui.state.toast_manager.is_empty());
}

#[tokio::test]
async fn logout_request_changes_nothing() {
    let mut state = state();
    loaded(&mut state);

    send(&mut state, ProfileMessage::LogoutRequested);

    assert!(state.domains.profile.state.is_loaded());
    assert!(state.domains.ui.state.toast_manager.is_empty());
}
