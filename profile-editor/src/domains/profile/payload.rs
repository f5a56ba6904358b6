//! Update request construction.

use profile_config::UpdatePayloadMode;
use profile_model::UpdateUserRequest;

use super::state::FormData;

/// Build the `PUT` body from the current form.
///
/// In [`UpdatePayloadMode::Legacy`] neither `mobile` nor `profile` is sent,
/// matching what deployed servers have always received from this screen.
/// [`UpdatePayloadMode::Complete`] sends the typed mobile number as
/// `mobile`. `profile` is never populated: the avatar stays local.
pub fn build_update_request(
    form: &FormData,
    mode: UpdatePayloadMode,
) -> UpdateUserRequest {
    let mobile = match mode {
        UpdatePayloadMode::Legacy => {
            if !form.mobile_number.is_empty() {
                log::warn!(
                    "[Profile] Legacy update payload omits the mobile number; \
                     set PROFILE_UPDATE_PAYLOAD=complete to send it"
                );
            }
            None
        }
        UpdatePayloadMode::Complete => Some(form.mobile_number.clone()),
    };

    UpdateUserRequest {
        email: form.email.clone(),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        mobile,
        address: form.address.clone(),
        profile: None,
    }
}
