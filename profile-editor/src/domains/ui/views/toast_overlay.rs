//! Toast notification overlay view
//!
//! Renders toast notifications in the top-right corner of the window.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::{FeedbackMessage, ToastId, ToastLevel};
use crate::domains::ui::messages::UiMessage;
use crate::domains::ui::theme::ProfileTheme;
use crate::state::State;

/// View the toast overlay - renders all active toasts
pub fn view_toast_overlay(state: &State) -> Element<'_, DomainMessage> {
    let toasts = &state.domains.ui.state.toast_manager.toasts;

    if toasts.is_empty() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let toast_elements: Vec<Element<'_, DomainMessage>> = toasts
        .iter()
        .map(|toast| view_single_toast(toast.id, &toast.message, toast.level))
        .collect();

    let toast_column = column(toast_elements).spacing(8).width(Length::Shrink);

    container(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        })
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn view_single_toast(
    id: ToastId,
    message: &str,
    level: ToastLevel,
) -> Element<'_, DomainMessage> {
    let (bg_color, border_color, icon) = match level {
        ToastLevel::Info => (ProfileTheme::CARD_BG, ProfileTheme::INFO, "i"),
        ToastLevel::Success => {
            (Color::from_rgb(0.1, 0.3, 0.1), ProfileTheme::SUCCESS, "✓")
        }
        ToastLevel::Warning => {
            (Color::from_rgb(0.3, 0.25, 0.1), ProfileTheme::WARNING, "!")
        }
        ToastLevel::Error => {
            (Color::from_rgb(0.3, 0.1, 0.1), ProfileTheme::ERROR, "✕")
        }
    };

    let dismiss_btn = button(text("×").size(14))
        .padding(4)
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: ProfileTheme::TEXT_SUBDUED,
            ..Default::default()
        })
        .on_press(DomainMessage::from(UiMessage::from(
            FeedbackMessage::DismissToast(id),
        )));

    let content = row![
        text(icon).size(16).color(border_color),
        Space::with_width(Length::Fixed(8.0)),
        text(message).size(13).color(ProfileTheme::TEXT_PRIMARY),
        Space::with_width(Length::Fixed(12.0)),
        dismiss_btn,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding {
            top: 10.0,
            right: 14.0,
            bottom: 10.0,
            left: 14.0,
        })
        .style(move |_| container::Style {
            background: Some(Background::Color(bg_color)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
