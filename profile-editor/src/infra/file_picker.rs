//! Native file dialog for choosing an avatar image.

use std::path::PathBuf;

/// Extensions offered in the picker; decoding decides what is really usable.
pub const IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tiff"];

/// Ask the user for an image file. `None` when the dialog was dismissed.
pub async fn pick_image_file() -> Option<PathBuf> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Choose avatar")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;
    Some(handle.path().to_path_buf())
}
