pub mod api_client;
pub mod errors;
pub mod file_picker;
pub mod services;
pub mod testing;

pub use api_client::ApiClient;
pub use errors::ApiError;
