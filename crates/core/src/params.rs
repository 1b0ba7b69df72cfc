//! Validated construction parameters for the test sources and previews.
//!
//! Every parameter can be built either from a typed value or parsed from raw
//! caller supplied text, and either way it is checked before any GStreamer
//! element exists.

mod error;
mod geometry;
mod id;
mod overlay;
mod pattern;
mod port;
#[cfg(feature = "audio")]
mod wave;

pub use error::*;
pub use geometry::*;
pub use overlay::*;
pub use pattern::*;
pub use port::*;
#[cfg(feature = "audio")]
pub use wave::*;

/// All the information needed to build a [crate::VideoSrc]
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSrcParams {
    pub endpoint: StreamEndpoint,
    pub geometry: FrameGeometry,
    pub pattern: Pattern,
    pub overlays: OverlayFlags,
}

impl VideoSrcParams {
    /// Uses the default 300x200 geometry, a random pattern and no overlays
    pub fn new(port: Port) -> Self {
        Self {
            endpoint: StreamEndpoint::new(port),
            geometry: FrameGeometry::default(),
            pattern: Pattern::random(),
            overlays: OverlayFlags::default(),
        }
    }

    /// Validates every raw value in one go, failing on the first invalid one
    /// (in the order port, width, height, pattern, timeoverlay, clockoverlay).
    ///
    /// A `pattern` of [None] is replaced with a random one.
    pub fn parse(
        port: &str,
        width: &str,
        height: &str,
        pattern: Option<&str>,
        timeoverlay: &str,
        clockoverlay: &str,
    ) -> Result<Self, ParamError> {
        let port = port.parse::<Port>()?;
        let geometry = FrameGeometry::parse(width, height)?;
        let pattern = match pattern {
            Some(p) => p.parse()?,
            None => Pattern::random(),
        };
        let overlays = OverlayFlags::parse(timeoverlay, clockoverlay)?;

        Ok(Self {
            endpoint: StreamEndpoint::new(port),
            geometry,
            pattern,
            overlays,
        })
    }

    pub fn with_geometry(mut self, geometry: FrameGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Shows the running time of the stream over the video
    pub fn with_timeoverlay(mut self, enabled: bool) -> Self {
        self.overlays.timeoverlay = enabled;
        self
    }

    /// Shows the current wall clock time over the video
    pub fn with_clockoverlay(mut self, enabled: bool) -> Self {
        self.overlays.clockoverlay = enabled;
        self
    }
}

/// All the information needed to build a [crate::AudioSrc]
#[cfg(feature = "audio")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSrcParams {
    pub endpoint: StreamEndpoint,
    pub wave: Wave,
}

#[cfg(feature = "audio")]
impl AudioSrcParams {
    /// Uses a random wave
    pub fn new(port: Port) -> Self {
        Self {
            endpoint: StreamEndpoint::new(port),
            wave: Wave::random(),
        }
    }

    pub fn with_wave(mut self, wave: Wave) -> Self {
        self.wave = wave;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_set() {
        let params = VideoSrcParams::parse("5000", "640", "480", Some("5"), "True", "False")
            .expect("All parameters are valid");

        assert_eq!(params.endpoint.port().get(), 5000);
        assert_eq!(params.geometry.width(), 640.0);
        assert_eq!(params.geometry.height(), 480.0);
        assert_eq!(params.pattern.get(), 5);
        assert!(params.overlays.timeoverlay);
        assert!(!params.overlays.clockoverlay);
    }

    #[test]
    fn parse_reports_first_invalid() {
        let res = VideoSrcParams::parse("0", "", "480", Some("20"), "maybe", "False");

        assert!(
            matches!(
                res,
                Err(ParamError::Blank(Param::Port))
            ),
            "The port is checked before anything else"
        );
    }

    #[test]
    fn parse_without_pattern() {
        let params = VideoSrcParams::parse("3000", "300", "200", None, "False", "False")
            .expect("A missing pattern is generated");

        assert!(params.pattern.get() <= Pattern::MAX);
    }
}
