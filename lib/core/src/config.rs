/// Environment variable holding the base URL of the remote comments
/// endpoint. The address is resolved on the server only and never embedded
/// in the client binary.
pub const COMMENTS_ENDPOINT_ENV: &str = "COMMENTS_ENDPOINT";

#[cfg(feature = "ssr")]
pub mod ssr {
    use std::env;

    use leptos::prelude::use_context;
    use url::Url;

    use inkline_utils::errors::AppError;

    use super::COMMENTS_ENDPOINT_ENV;

    pub fn get_comments_endpoint() -> Result<Url, AppError> {
        let raw = env::var(COMMENTS_ENDPOINT_ENV)?;
        Ok(Url::parse(&raw)?)
    }

    /// The shared HTTP client is placed into the reactive context by the
    /// server's request handlers.
    pub fn get_http_client() -> Result<reqwest::Client, AppError> {
        use_context::<reqwest::Client>()
            .ok_or_else(|| AppError::new("HTTP client missing from context."))
    }
}
