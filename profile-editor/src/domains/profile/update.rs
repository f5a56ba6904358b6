use iced::Task;
use iced::widget::image;
use log::{debug, info};

use super::avatar::{self, PreviewApplied};
use super::messages::ProfileMessage;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::domains::ui::feedback_ui::Notification;
use crate::infra::file_picker;
use crate::state::State;

/// Handle profile domain messages
pub fn update_profile(
    state: &mut State,
    message: ProfileMessage,
) -> DomainUpdateResult {
    debug!("[Profile] update: {}", message.name());

    match message {
        ProfileMessage::Load => {
            let domain = &mut state.domains.profile;
            domain.state.begin_load();
            let service = domain.service.clone();
            let username = domain.target_user.clone();
            info!("[Profile] Fetching user '{}'", username);

            DomainUpdateResult::task(Task::perform(
                async move { service.fetch_user(&username).await },
                |result| DomainMessage::from(ProfileMessage::Loaded(result)),
            ))
        }

        ProfileMessage::Loaded(result) => {
            let notification = state.domains.profile.state.apply_loaded(result);
            notify(Task::none(), notification)
        }

        ProfileMessage::FieldChanged(field, value) => {
            if let Err(err) =
                state.domains.profile.state.set_field(field, value)
            {
                debug!("[Profile] Ignoring edit: {}", err);
            }
            DomainUpdateResult::task(Task::none())
        }

        ProfileMessage::PickAvatar => DomainUpdateResult::task(Task::perform(
            file_picker::pick_image_file(),
            |picked| DomainMessage::from(ProfileMessage::AvatarPicked(picked)),
        )),

        ProfileMessage::AvatarPicked(None) => {
            debug!("[Profile] Avatar picker dismissed");
            DomainUpdateResult::task(Task::none())
        }

        ProfileMessage::AvatarPicked(Some(path)) => {
            let selection = state.domains.profile.state.avatar.select(path);
            info!(
                "[Profile] Decoding avatar '{}'",
                avatar::display_name(&selection.path)
            );
            let generation = selection.generation;

            DomainUpdateResult::task(Task::perform(
                avatar::decode_preview(selection.path),
                move |result| {
                    DomainMessage::from(ProfileMessage::PreviewDecoded(
                        generation, result,
                    ))
                },
            ))
        }

        ProfileMessage::PreviewDecoded(generation, result) => {
            let applied = state
                .domains
                .profile
                .state
                .avatar
                .apply_preview(generation, result);

            match applied {
                PreviewApplied::Applied => {
                    state.domains.ui.state.avatar_handle = state
                        .domains
                        .profile
                        .state
                        .avatar
                        .preview
                        .as_ref()
                        .map(|preview| {
                            image::Handle::from_bytes(preview.bytes.to_vec())
                        });
                    DomainUpdateResult::task(Task::none())
                }
                PreviewApplied::Stale => DomainUpdateResult::task(Task::none()),
                PreviewApplied::Failed(err) => notify(
                    Task::none(),
                    Some(Notification::warning(err.to_string())),
                ),
            }
        }

        ProfileMessage::Submit => {
            match state.domains.profile.state.begin_submit() {
                Ok(pending) => {
                    let service = state.domains.profile.service.clone();
                    info!("[Profile] Sending update for '{}'", pending.username);

                    DomainUpdateResult::task(Task::perform(
                        async move {
                            service
                                .update_user(&pending.username, &pending.request)
                                .await
                        },
                        |result| {
                            DomainMessage::from(ProfileMessage::Submitted(
                                result,
                            ))
                        },
                    ))
                }
                Err(err) => {
                    debug!("[Profile] Update rejected: {}", err);
                    notify(Task::none(), Some(Notification::error(err.to_string())))
                }
            }
        }

        ProfileMessage::Submitted(result) => {
            let resolution = state.domains.profile.state.finish_submit(result);
            let task = if resolution.reload {
                Task::done(DomainMessage::from(ProfileMessage::Load))
            } else {
                Task::none()
            };
            notify(task, Some(resolution.notification))
        }

        ProfileMessage::LogoutRequested => DomainUpdateResult::with_events(
            Task::none(),
            vec![CrossDomainEvent::LogoutRequested],
        ),
    }
}

fn notify(
    task: Task<DomainMessage>,
    notification: Option<Notification>,
) -> DomainUpdateResult {
    let events = notification
        .map(CrossDomainEvent::Notify)
        .into_iter()
        .collect();
    DomainUpdateResult::with_events(task, events)
}
