//! The JSON file accepted by `switch-testsource run`
//!
//! ```json
//! {
//!   "video": [{ "port": 3000, "pattern": 0, "timeoverlay": true }],
//!   "audio": [{ "port": 4000, "wave": 2 }],
//!   "preview": [{ "port": 3003, "sink": "fakesink" }]
//! }
//! ```
//!
//! Values may be given as JSON numbers, booleans or strings, and are checked
//! the same way as the command line arguments.

use std::{fmt, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use switch_testsource::params::{
    AudioSrcParams, FrameGeometry, OverlayFlags, ParamError, Pattern, Port, StreamEndpoint,
    VideoSrcParams, Wave,
};

/// A value as written in the file, before it is validated
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default)]
    pub video: Vec<VideoEntry>,
    #[serde(default)]
    pub audio: Vec<AudioEntry>,
    #[serde(default)]
    pub preview: Vec<PreviewEntry>,
}

impl SessionConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoEntry {
    pub port: RawValue,
    pub width: Option<RawValue>,
    pub height: Option<RawValue>,
    pub pattern: Option<RawValue>,
    pub timeoverlay: Option<RawValue>,
    pub clockoverlay: Option<RawValue>,
}

impl VideoEntry {
    pub fn params(&self) -> Result<VideoSrcParams, ParamError> {
        let port = self.port.to_string().parse::<Port>()?;
        let geometry = FrameGeometry::parse(
            &or_default(&self.width, FrameGeometry::DEFAULT_WIDTH),
            &or_default(&self.height, FrameGeometry::DEFAULT_HEIGHT),
        )?;
        let overlays = OverlayFlags::parse(
            &or_default(&self.timeoverlay, "False"),
            &or_default(&self.clockoverlay, "False"),
        )?;

        let mut params = VideoSrcParams::new(port).with_geometry(geometry);
        params.overlays = overlays;
        if let Some(pattern) = &self.pattern {
            params = params.with_pattern(pattern.to_string().parse::<Pattern>()?);
        }

        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioEntry {
    pub port: RawValue,
    pub wave: Option<RawValue>,
}

impl AudioEntry {
    pub fn params(&self) -> Result<AudioSrcParams, ParamError> {
        let mut params = AudioSrcParams::new(self.port.to_string().parse()?);
        if let Some(wave) = &self.wave {
            params = params.with_wave(wave.to_string().parse::<Wave>()?);
        }
        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewEntry {
    pub port: RawValue,
    /// Element factory used to display the video, `autovideosink` if unset
    pub sink: Option<String>,
}

impl PreviewEntry {
    pub fn endpoint(&self) -> Result<StreamEndpoint, ParamError> {
        Ok(StreamEndpoint::new(self.port.to_string().parse()?))
    }

    pub fn sink(&self) -> &str {
        self.sink.as_deref().unwrap_or("autovideosink")
    }
}

fn or_default<D: fmt::Display>(value: &Option<RawValue>, default: D) -> String {
    match value {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use switch_testsource::params::Param;

    use super::*;

    #[test]
    fn full_session() {
        let config = SessionConfig::from_json(
            r#"{
                "video": [
                    { "port": 3000, "width": 640, "height": "480", "pattern": "18",
                      "timeoverlay": true, "clockoverlay": "False" },
                    { "port": "3000" }
                ],
                "audio": [{ "port": 4000, "wave": 2 }],
                "preview": [{ "port": 3003, "sink": "fakesink" }]
            }"#,
        )
        .expect("Valid JSON");

        let first = config.video[0].params().expect("Valid parameters");
        assert_eq!(first.endpoint.port().get(), 3000);
        assert_eq!(first.geometry, FrameGeometry::new(640.0, 480.0).unwrap());
        assert_eq!(first.pattern.nick(), "ball");
        assert_eq!(first.overlays, OverlayFlags::new(true, false));

        let second = config.video[1].params().expect("Defaults are filled in");
        assert_eq!(second.geometry, FrameGeometry::default());
        assert_eq!(second.overlays, OverlayFlags::default());

        assert_eq!(config.audio[0].params().unwrap().wave.nick(), "saw");

        let named =
            SessionConfig::from_json(r#"{ "video": [{ "port": 3000, "pattern": "ball" }] }"#)
                .expect("Valid JSON");
        assert!(
            matches!(
                named.video[0].params(),
                Err(ParamError::TypeMismatch {
                    param: Param::Pattern,
                    ..
                })
            ),
            "Patterns are given by id"
        );
        assert_eq!(config.preview[0].sink(), "fakesink");
        assert_eq!(config.preview[0].endpoint().unwrap().port().get(), 3003);
    }

    #[test]
    fn validates_entries() {
        let config = SessionConfig::from_json(
            r#"{ "video": [
                { "port": 0 },
                { "port": 3000, "width": 0 },
                { "port": 3000, "pattern": 20 },
                { "port": 3000, "timeoverlay": "maybe" }
            ] }"#,
        )
        .expect("Valid JSON");

        let params = config
            .video
            .iter()
            .map(|v| v.params().map_err(|e| e.param()))
            .collect::<Vec<_>>();

        assert_eq!(
            params.iter().map(|p| p.as_ref().err()).collect::<Vec<_>>(),
            vec![
                Some(&Param::Port),
                Some(&Param::Width),
                Some(&Param::Pattern),
                Some(&Param::TimeOverlay),
            ]
        );
    }

    #[test]
    fn unknown_fields() {
        assert!(SessionConfig::from_json(r#"{ "video": [{ "port": 1, "fps": 30 }] }"#).is_err());
    }
}
