//! Profile form behaviour against the in-memory user service
//!
//! Covers loading, field edits, validation gating and the update round trip
//! including the refresh that follows a successful save.

use std::sync::Arc;
use std::time::Duration;

use profile_config::{ClientConfig, UpdatePayloadMode};
use profile_editor::domains::profile::{
    FieldError, FormData, LoadStatus, ProfileField, ProfileForm, SubmitOutcome,
    ValidationError,
};
use profile_editor::domains::ui::feedback_ui::ToastLevel;
use profile_editor::infra::ApiError;
use profile_editor::infra::testing::stubs::{StubCall, StubUserProfileService};
use profile_model::{MessageResponse, UserRecord};

fn form_with(stub: &StubUserProfileService, mode: UpdatePayloadMode) -> ProfileForm {
    ProfileForm::new(Arc::new(stub.clone()), "sharma", mode, Duration::from_secs(4))
}

fn form(stub: &StubUserProfileService) -> ProfileForm {
    form_with(stub, UpdatePayloadMode::Legacy)
}

#[tokio::test]
async fn load_fills_missing_optionals_with_empty_strings() {
    let stub = StubUserProfileService::new()
        .with_user(UserRecord::new("sharma").with_email("a@b.com"));
    let mut form = form(&stub);

    form.load().await.unwrap();

    assert_eq!(
        form.form_data(),
        &FormData {
            username: "sharma".into(),
            email: "a@b.com".into(),
            ..FormData::empty()
        }
    );
    assert_eq!(form.state().load_status, LoadStatus::Loaded);
    assert!(form.toasts().is_empty());
    assert_eq!(
        stub.calls(),
        vec![StubCall::Fetch {
            username: "sharma".into()
        }]
    );
}

#[tokio::test]
async fn failed_load_shows_server_message_and_keeps_defaults() {
    let stub = StubUserProfileService::new();
    stub.queue_fetch(Err(ApiError::server(404, "Not found")));
    let mut form = form(&stub);

    let err = form.load().await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(form.toasts().messages(ToastLevel::Error), vec!["Not found"]);
    assert_eq!(form.form_data(), &FormData::default());
    assert_eq!(form.state().load_status, LoadStatus::Failed);
}

#[tokio::test]
async fn form_stays_editable_after_failed_load() {
    let stub = StubUserProfileService::new();
    let mut form = form(&stub);
    let _ = form.load().await;

    form.on_field_change("firstName", "Ravi").unwrap();
    assert_eq!(form.form_data().first_name, "Ravi");
    assert_eq!(form.form_data().email, "email@gmail.com");
}

#[tokio::test]
async fn field_change_preserves_other_fields() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form(&stub);
    form.load().await.unwrap();
    let before = form.form_data().clone();

    form.on_field_change("address", "Elm Street 12").unwrap();

    assert_eq!(
        form.form_data(),
        &before.with(ProfileField::Address, "Elm Street 12")
    );
}

#[tokio::test]
async fn field_change_rejects_unknown_and_read_only_fields() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form(&stub);
    form.load().await.unwrap();

    assert_eq!(
        form.on_field_change("mobile", "1234567890"),
        Err(FieldError::Unknown("mobile".into()))
    );
    assert_eq!(
        form.on_field_change("username", "someone-else"),
        Err(FieldError::ReadOnly(ProfileField::Username))
    );
    assert_eq!(form.form_data().username, "sharma");
}

#[tokio::test]
async fn invalid_first_name_is_rejected_without_network_call() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form(&stub);
    form.load().await.unwrap();
    form.on_field_change("firstName", "A").unwrap();

    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::FirstName));
    assert_eq!(
        form.toasts().messages(ToastLevel::Error),
        vec!["Invalid firstName"]
    );
    assert_eq!(stub.update_count(), 0);
    assert!(!form.state().is_submitting());
}

#[tokio::test]
async fn validate_reports_first_failure_as_toast() {
    let stub = StubUserProfileService::new();
    let mut form = form(&stub);
    form.on_field_change("mobileNumber", "12345").unwrap();
    form.on_field_change("email", "nope").unwrap();

    assert!(!form.validate());
    assert_eq!(
        form.toasts().latest().map(|t| t.message.as_str()),
        Some("Mobile Number should contain exactly 10 digits")
    );

    form.on_field_change("mobileNumber", "").unwrap();
    form.on_field_change("email", "user@domain.com").unwrap();
    assert!(form.validate());
    assert_eq!(form.toasts().len(), 1);
}

#[tokio::test]
async fn successful_submit_shows_message_and_reloads() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    stub.queue_update(Ok(MessageResponse::new("Updated")));
    let mut form = form(&stub);
    form.load().await.unwrap();
    form.on_field_change("lastName", "Verma").unwrap();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            message: "Updated".into()
        }
    );
    assert_eq!(form.toasts().messages(ToastLevel::Success), vec!["Updated"]);

    // fetch, update, then the refresh fetch strictly after the update
    let calls = stub.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], StubCall::Fetch { .. }));
    assert!(matches!(calls[1], StubCall::Update { .. }));
    assert!(matches!(calls[2], StubCall::Fetch { .. }));
    assert!(!form.state().is_submitting());
}

#[tokio::test]
async fn reload_after_submit_reflects_stored_record() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form(&stub);
    form.load().await.unwrap();
    form.on_field_change("address", "Elm Street 12").unwrap();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Updated {
            message: "Record Updated...!".into()
        }
    );
    assert_eq!(form.form_data().address, "Elm Street 12");
    assert_eq!(
        stub.user("sharma").and_then(|u| u.address),
        Some("Elm Street 12".into())
    );
}

#[tokio::test]
async fn legacy_payload_omits_mobile_and_profile() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form(&stub);
    form.load().await.unwrap();
    form.on_field_change("mobileNumber", "0123456789").unwrap();

    form.submit().await;

    let request = stub.last_update().unwrap();
    assert_eq!(request.mobile, None);
    assert_eq!(request.profile, None);
    assert_eq!(request.first_name, "Ravi");
    // the stored number is untouched, so the reload brings it back
    assert_eq!(form.form_data().mobile_number, "9876543210");
}

#[tokio::test]
async fn complete_payload_sends_mobile_number() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    let mut form = form_with(&stub, UpdatePayloadMode::Complete);
    form.load().await.unwrap();
    form.on_field_change("mobileNumber", "0123456789").unwrap();

    form.submit().await;

    assert_eq!(
        stub.last_update().and_then(|r| r.mobile),
        Some("0123456789".into())
    );
    assert_eq!(form.form_data().mobile_number, "0123456789");
}

#[tokio::test]
async fn failed_submit_shows_error_and_skips_reload() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    stub.queue_update(Err(ApiError::server(500, "Database down")));
    let mut form = form(&stub);
    form.load().await.unwrap();

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(ApiError::server(500, "Database down"))
    );
    assert_eq!(
        form.toasts().messages(ToastLevel::Error),
        vec!["Database down"]
    );
    assert_eq!(stub.fetch_count(), 1);
    assert!(!form.state().is_submitting());
}

#[tokio::test]
async fn error_without_message_falls_back_to_status_text() {
    let stub = StubUserProfileService::with_demo_user("sharma");
    stub.queue_update(Err(ApiError::Server {
        status: 502,
        message: None,
    }));
    let mut form = form(&stub);
    form.load().await.unwrap();

    form.submit().await;

    assert_eq!(
        form.toasts().messages(ToastLevel::Error),
        vec!["Request failed with status 502"]
    );
}

#[tokio::test]
async fn submit_before_load_targets_empty_username() {
    let stub = StubUserProfileService::new();
    let mut form = form(&stub);

    let outcome = form.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(
        stub.calls(),
        vec![StubCall::Update {
            username: String::new(),
            request: stub.last_update().unwrap(),
        }]
    );
}

#[tokio::test]
async fn from_config_uses_configured_user_and_payload() {
    let stub = StubUserProfileService::with_demo_user("priya");
    let config = ClientConfig::default()
        .with_username("priya")
        .with_update_payload(UpdatePayloadMode::Complete);
    let mut form = ProfileForm::from_config(Arc::new(stub.clone()), &config);

    form.load().await.unwrap();
    form.submit().await;

    assert_eq!(form.target_user(), "priya");
    assert!(stub.last_update().and_then(|r| r.mobile).is_some());
}
