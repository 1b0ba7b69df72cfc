pub mod relay;
pub mod server;

pub use anyhow;

use gst::ElementFactory;

/// Factories needed by each pipeline, so tests can check they are installed
pub mod elements {
    pub const VIDEO_SRC: &[&str] = &["videotestsrc", "capsfilter", "gdppay", "tcpclientsink"];
    pub const OVERLAYS: &[&str] = &["timeoverlay", "clockoverlay"];
    pub const AUDIO_SRC: &[&str] = &["audiotestsrc", "gdppay", "tcpclientsink"];
    pub const PREVIEW: &[&str] = &["tcpclientsrc", "gdpdepay", "fakesink"];
}

/// Returns the factories out of `names` which are not installed.
///
/// GStreamer must already be initialised.
pub fn missing_elements<'a>(names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| ElementFactory::find(name).is_none())
        .collect()
}
