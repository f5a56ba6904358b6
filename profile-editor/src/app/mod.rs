use iced::Size;

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

const WINDOW_SIZE: Size = Size::new(560.0, 820.0);

/// Build and run the editor with the provided configuration.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    if let Some(path) = &config.source_file {
        log::info!("[App] Using config file {}", path.display());
    }
    log::info!(
        "[App] API {} (update payload: {})",
        config.client.api_base_url,
        config.client.update_payload
    );

    let state: State = bootstrap::base_state(&config)?;

    iced::application("Profile", update::update, view::view)
        .subscription(subscriptions::subscription)
        .theme(view::theme)
        .window_size(WINDOW_SIZE)
        .run_with(move || bootstrap::runtime_boot(state))?;

    Ok(())
}
