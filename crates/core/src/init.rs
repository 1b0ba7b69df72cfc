use std::sync::OnceLock;

use crate::error::{Error, StreamError};

static INIT: OnceLock<Result<(), StreamError>> = OnceLock::new();

/// Initialises GStreamer for the whole process.
///
/// This must be called before any pipeline is built, calling it again
/// returns the result of the first call.
pub fn initialize() -> Result<(), StreamError> {
    INIT.get_or_init(|| {
        let res = gst::init();
        match &res {
            Ok(()) => tracing::debug!(version = %gst::version_string(), "GStreamer initialised"),
            Err(e) => tracing::error!("Failed to initialise GStreamer: {e}"),
        }
        res
    })
    .clone()
}

/// Whether [initialize] has been called and succeeded
pub fn is_initialized() -> bool {
    matches!(INIT.get(), Some(Ok(())))
}

pub(crate) fn ensure_initialized() -> Result<(), Error> {
    if is_initialized() {
        Ok(())
    } else {
        Err(Error::NotInitialized)
    }
}
