//! GStreamer test sources and previews for exercising gst-switch.
//!
//! Call [initialize] once, then create a [VideoSrc] (or [AudioSrc]) to
//! stream a test pattern to a port of the switch server, and a [Preview] to
//! show what the server streams back.

mod error;
mod init;
mod lifecycle;
pub mod params;
pub mod pipeline;
mod preview;
mod source;

pub use error::*;
pub use init::{initialize, is_initialized};
pub use lifecycle::Lifecycle;
pub use preview::Preview;
#[cfg(feature = "audio")]
pub use source::AudioSrc;
pub use source::VideoSrc;

pub use gst;
