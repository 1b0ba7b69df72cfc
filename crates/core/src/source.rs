//! The test sources which stream into the switch server

use crate::{
    error::Error,
    init::ensure_initialized,
    lifecycle::Lifecycle,
    params::VideoSrcParams,
    pipeline::{PipelineGraph, VideoPipelineBuilder},
};

#[cfg(feature = "audio")]
use crate::{params::AudioSrcParams, pipeline::AudioPipelineBuilder};

/// A video test pattern streamed over TCP to the given port, e.g. the video
/// port of gst-switch-srv.
///
/// The source starts playing as soon as it is created.
///
/// ```no_run
/// use switch_testsource::{
///     Lifecycle, VideoSrc,
///     params::{FrameGeometry, Pattern, Port, VideoSrcParams},
/// };
///
/// switch_testsource::initialize()?;
///
/// let params = VideoSrcParams::new(Port::new(3000)?)
///     .with_geometry(FrameGeometry::new(640.0, 480.0)?)
///     .with_pattern(Pattern::new(5)?)
///     .with_timeoverlay(true);
///
/// let mut src = VideoSrc::new(params)?;
/// assert!(src.is_playing());
///
/// src.end()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct VideoSrc {
    params: VideoSrcParams,
    pipeline: PipelineGraph,
}

impl VideoSrc {
    pub fn new(params: VideoSrcParams) -> Result<Self, Error> {
        ensure_initialized()?;
        Self::with_builder(VideoPipelineBuilder::new(&params)?)
    }

    /// Builds the source from a customised builder, keeping the parameters
    /// the builder was created from
    pub fn with_builder(builder: VideoPipelineBuilder<'_>) -> Result<Self, Error> {
        ensure_initialized()?;

        let params = builder.params().clone();

        tracing::debug!(
            endpoint = %params.endpoint,
            geometry = %params.geometry,
            pattern = params.pattern.nick(),
            timeoverlay = params.overlays.timeoverlay,
            clockoverlay = params.overlays.clockoverlay,
            "Starting video test source"
        );

        let mut src = Self {
            params,
            pipeline: builder.build()?,
        };
        src.run()?;

        Ok(src)
    }

    /// The parameters the pipeline was built from.
    ///
    /// Stages changed through [Self::with_builder] may differ from these.
    pub fn params(&self) -> &VideoSrcParams {
        &self.params
    }
}

impl Lifecycle for VideoSrc {
    fn pipeline(&self) -> &PipelineGraph {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut PipelineGraph {
        &mut self.pipeline
    }
}

/// An audio test wave streamed over TCP to the given port, e.g. the audio
/// port of gst-switch-srv.
///
/// The source starts playing as soon as it is created.
#[cfg(feature = "audio")]
#[derive(Debug)]
pub struct AudioSrc {
    params: AudioSrcParams,
    pipeline: PipelineGraph,
}

#[cfg(feature = "audio")]
impl AudioSrc {
    pub fn new(params: AudioSrcParams) -> Result<Self, Error> {
        ensure_initialized()?;
        Self::with_builder(AudioPipelineBuilder::new(&params))
    }

    pub fn with_builder(builder: AudioPipelineBuilder<'_>) -> Result<Self, Error> {
        ensure_initialized()?;

        let params = builder.params().clone();

        tracing::debug!(
            endpoint = %params.endpoint,
            wave = params.wave.nick(),
            "Starting audio test source"
        );

        let mut src = Self {
            params,
            pipeline: builder.build()?,
        };
        src.run()?;

        Ok(src)
    }

    pub fn params(&self) -> &AudioSrcParams {
        &self.params
    }
}

#[cfg(feature = "audio")]
impl Lifecycle for AudioSrc {
    fn pipeline(&self) -> &PipelineGraph {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut PipelineGraph {
        &mut self.pipeline
    }
}
