macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// Route definitions for the user profile API.
pub mod api {
    pub mod user {
        /// `GET` a single user record by username.
        pub const ITEM: &str = api_path!("/user/{username}");
        /// `PUT` profile changes for a username.
        pub const UPDATE: &str = api_path!("/user/updateUser/{username}");
    }
}

/// Helpers for filling in route templates.
pub mod utils {
    /// Replace a single path parameter.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Fill the `{username}` segment, percent-encoding the value so names
    /// containing `/`, spaces or `?` stay inside a single path segment.
    pub fn user_path(route: &str, username: &str) -> String {
        replace_param(route, "{username}", urlencoding::encode(username))
    }
}
