//! UI domain
//!
//! Presentation state that does not belong to the profile itself: the toast
//! stack and the decoded avatar handed to the image widget.

pub mod feedback_ui;
pub mod messages;
pub mod theme;
pub mod update;
pub mod views;

use iced::widget::image;

use self::feedback_ui::ToastManager;

#[derive(Debug, Default)]
pub struct UIDomainState {
    pub toast_manager: ToastManager,
    /// Rendered avatar; rebuilt whenever a new preview is applied.
    pub avatar_handle: Option<image::Handle>,
}

#[derive(Debug, Default)]
pub struct UIDomain {
    pub state: UIDomainState,
}

impl UIDomain {
    pub fn new(state: UIDomainState) -> Self {
        Self { state }
    }
}
