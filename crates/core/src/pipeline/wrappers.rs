//! Stores basic wrappers around the GStreamer library

use gst::{StateChangeSuccess, prelude::ElementExt};

use super::utils::get_bus_messages;

/// How long a state change may stay asynchronous before it is left to finish
/// in the background
pub const STATE_CHANGE_TIMEOUT: gst::ClockTime = gst::ClockTime::SECOND;

pub trait SetState {
    /// Changes the state, waiting up to [STATE_CHANGE_TIMEOUT] for an
    /// asynchronous change to complete.
    ///
    /// On failure the element is shut down to [gst::State::Null] and the
    /// first error posted on its bus is returned.
    fn set_state_blocking(&self, new_state: gst::State) -> Result<(), glib::Error>;
}

impl<T: ElementExt> SetState for T {
    fn set_state_blocking(&self, new_state: gst::State) -> Result<(), glib::Error> {
        let state_change_error = match self.set_state(new_state) {
            Ok(StateChangeSuccess::Success | StateChangeSuccess::NoPreroll) => return Ok(()),
            Ok(StateChangeSuccess::Async) => {
                let (result, _curr, _pending) = self.state(STATE_CHANGE_TIMEOUT);
                match result {
                    // Still prerolling, e.g. waiting on data from the
                    // network, which GStreamer finishes on its own
                    Ok(_) => return Ok(()),
                    Err(e) => e,
                }
            }
            Err(e) => e,
        };

        let error = self
            .bus()
            .and_then(|bus| get_bus_messages(&bus).errors.into_iter().next())
            .unwrap_or_else(|| {
                glib::Error::new(
                    gst::CoreError::StateChange,
                    &format!("GStreamer state change to {new_state:?} failed: {state_change_error}"),
                )
            });

        if new_state == gst::State::Null {
            return Err(error);
        }

        // Close down the pipeline before returning to prevent memory leaks
        if let Err(e) = self.set_state(gst::State::Null) {
            tracing::error!("Could not shut down after a failed state change: {e}");
        }

        Err(error)
    }
}
