//! Profile editing screen
//!
//! Heading, avatar, the five editable fields, the update button and the
//! logout footer.

use iced::alignment::Horizontal;
use iced::widget::{
    button, column, container, image, mouse_area, row, text, text_input,
};
use iced::{
    Alignment, Background, Border, ContentFit, Element, Length, mouse,
};

use crate::common::messages::DomainMessage;
use crate::domains::profile::avatar::display_name;
use crate::domains::profile::{LoadStatus, ProfileField, ProfileMessage};
use crate::domains::ui::theme::ProfileTheme;
use crate::state::State;

const AVATAR_SIZE: f32 = 120.0;

pub fn view_profile(state: &State) -> Element<'_, DomainMessage> {
    let profile = &state.domains.profile.state;
    let form = &profile.form;

    let mut heading = column![
        text("Profile").size(32).color(ProfileTheme::TEXT_PRIMARY)
    ]
    .spacing(4)
    .align_x(Alignment::Center);
    if !form.username.is_empty() {
        heading = heading.push(
            text(format!("@{}", form.username))
                .size(14)
                .color(ProfileTheme::TEXT_SECONDARY),
        );
    }
    if profile.load_status == LoadStatus::Loading {
        heading = heading.push(
            text("Loading profile...")
                .size(12)
                .color(ProfileTheme::TEXT_SUBDUED),
        );
    }

    let fields = ProfileField::EDITABLE.into_iter().fold(
        column![].spacing(12),
        |fields, field| {
            fields.push(
                text_input(field.placeholder(), form.get(field))
                    .on_input(move |value| {
                        DomainMessage::from(ProfileMessage::FieldChanged(
                            field, value,
                        ))
                    })
                    .on_submit(DomainMessage::from(ProfileMessage::Submit))
                    .padding(10)
                    .size(16),
            )
        },
    );

    let submitting = profile.is_submitting();
    let update_button = button(
        text(if submitting { "Updating..." } else { "Update" })
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([10, 20])
    .on_press_maybe(
        (!submitting).then(|| DomainMessage::from(ProfileMessage::Submit)),
    );

    let footer = row![
        text("Come back Later ?")
            .size(14)
            .color(ProfileTheme::TEXT_SECONDARY),
        button(text("Log Out").size(14))
            .padding([0, 4])
            .style(|_theme, _status| button::Style {
                background: None,
                text_color: ProfileTheme::ACCENT,
                ..Default::default()
            })
            .on_press(DomainMessage::from(ProfileMessage::LogoutRequested)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let content = column![
        heading,
        view_avatar(state),
        fields,
        update_button,
        footer,
    ]
    .spacing(20)
    .padding(30)
    .max_width(480)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_avatar(state: &State) -> Element<'_, DomainMessage> {
    let picture: Element<'_, DomainMessage> =
        match &state.domains.ui.state.avatar_handle {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(AVATAR_SIZE))
                .height(Length::Fixed(AVATAR_SIZE))
                .content_fit(ContentFit::Cover)
                .into(),
            None => avatar_placeholder(state),
        };

    let caption = match &state.domains.profile.state.avatar.selection {
        Some(selection) => display_name(&selection.path),
        None => "Click to choose a picture".to_string(),
    };

    column![
        mouse_area(picture)
            .on_press(DomainMessage::from(ProfileMessage::PickAvatar))
            .interaction(mouse::Interaction::Pointer),
        text(caption).size(12).color(ProfileTheme::TEXT_SUBDUED),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .into()
}

fn avatar_placeholder(state: &State) -> Element<'_, DomainMessage> {
    let form = &state.domains.profile.state.form;
    let initials: String = [&form.first_name, &form.last_name]
        .into_iter()
        .filter_map(|name| name.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    let label = if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    };

    container(text(label).size(40).color(ProfileTheme::TEXT_PRIMARY))
        .center_x(Length::Fixed(AVATAR_SIZE))
        .center_y(Length::Fixed(AVATAR_SIZE))
        .style(|_| container::Style {
            background: Some(Background::Color(ProfileTheme::CARD_BG)),
            border: Border {
                color: ProfileTheme::BORDER_COLOR,
                width: 1.0,
                radius: (AVATAR_SIZE / 2.0).into(),
            },
            ..Default::default()
        })
        .into()
}
