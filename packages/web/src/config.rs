//! Backend endpoint configuration

/// Mount point of the original backend's extraction router.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/extract/";

/// Base URL of the extraction backend. `EXTRACT_API_URL` overrides the
/// localhost default; this is the only environment-driven behavior.
pub fn api_url() -> String {
    std::env::var("EXTRACT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
