//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` used by the binaries.
//!
//! Actors log with an `entity_type` field instead of a module path, so the compact
//! format hides targets (`with_target(false)`) and shows spans inline:
//!
//! ```text
//! INFO Actor started entity_type="Lesson" base_url="https://www.talkietotz.com"
//! INFO fetch_all: Fetched entity_type="Lesson" size=12
//! WARN create_lesson: Request failed entity_type="Lesson" error=Failed to create lesson (HTTP 400)
//! ```
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info talkie lessons list     # one line per settled request
//! RUST_LOG=debug talkie lessons list    # payloads and rejections too
//! ```
//!
//! The bearer token is never recorded; `ApiContext`'s `Debug` only reports whether one is set.

/// Initializes structured logging filtered by `RUST_LOG`.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
