//! Post-call error checking
//!
//! The driver keeps a small sticky set of error flags and `glGetError` hands back
//! one per call, so one bad call can leave several pending. Checking means polling
//! until `GL_NO_ERROR`.

use crate::config::ErrorPolicy;
use crate::error::GlError;
use crate::ffi::GLenum;
use tracing::{error, warn};

/// Upper bound on codes drained by a single check
pub const MAX_DRAINED_ERRORS: usize = 64;

/// Poll `next_error` until it reports `GL_NO_ERROR`, classifying each code.
pub fn drain_errors(mut next_error: impl FnMut() -> GLenum) -> Vec<GlError> {
    let mut errors = Vec::new();
    while let Some(error) = GlError::from_raw(next_error()) {
        errors.push(error);
        if errors.len() == MAX_DRAINED_ERRORS {
            warn!(
                "GL error queue still not clear after {} reads, giving up",
                MAX_DRAINED_ERRORS
            );
            break;
        }
    }
    errors
}

/// Apply `policy` after a call to the GL entry point `call`.
///
/// Returns whatever was drained. Under [`ErrorPolicy::Assert`] a non-empty drain
/// never returns: the process aborts once the errors are logged.
pub fn check(policy: ErrorPolicy, call: &'static str, next_error: impl FnMut() -> GLenum) -> Vec<GlError> {
    if policy == ErrorPolicy::None {
        return Vec::new();
    }

    let errors = drain_errors(next_error);
    for gl_error in &errors {
        error!(call, code = gl_error.to_raw(), "GL error: {}", gl_error);
    }

    if policy == ErrorPolicy::Assert && !errors.is_empty() {
        error!(call, "Aborting on GL error ({} pending)", errors.len());
        std::process::abort();
    }

    errors
}
