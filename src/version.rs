//! Helpers for reporting the compiled version of the library, both to calling applications and as
//! the version embedded in the user agent of the library's HTTP client.

/// Reports the full version along with the build settings that produced it as a well-formatted,
/// semi-structured string.
pub fn full_version() -> String {
    format!(
        "build-profile={} build-timestamp={} features={} repo-version={}",
        env!("BUILD_PROFILE"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_FEATURES"),
        env!("REPO_VERSION"),
    )
}

/// The absolute core version information from the build, suitable for places where size matters.
/// This is the form that ends up in the HTTP client's user agent.
pub fn minimal_version() -> String {
    format!("repo-version={}", env!("REPO_VERSION"),)
}
