//! Root-level view composition

use iced::widget::stack;
use iced::{Element, Theme};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::ProfileTheme;
use crate::domains::ui::views::{view_profile, view_toast_overlay};
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    stack![view_profile(state), view_toast_overlay(state)].into()
}

pub fn theme(_: &State) -> Theme {
    ProfileTheme::theme()
}
