pub mod profile_view;
pub mod toast_overlay;

pub use profile_view::view_profile;
pub use toast_overlay::view_toast_overlay;
