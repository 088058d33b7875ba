//! Build-time configuration

/// API base URL, e.g. `http://localhost:8000`.
///
/// Supplied through the `CLOUDSYNC_API_URL` environment variable when the
/// app is built. Defaults to the empty string, which makes every request
/// relative to the page origin.
pub fn api_base_url() -> &'static str {
    option_env!("CLOUDSYNC_API_URL").unwrap_or("")
}
