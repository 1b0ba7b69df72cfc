//! This stores the builder for the video test source pipeline

use std::str::FromStr;

use gst::{ElementFactory, element_factory::ElementBuilder};

use crate::{
    error::BuilderError,
    params::{StreamEndpoint, VideoSrcParams},
};

use super::{PipelineGraph, Stage, StageRole};

/// Font used by both the time and clock overlays
pub const OVERLAY_FONT: &str = "Verdana bold 50";

/// Builds the pipeline behind a [crate::VideoSrc].
///
/// Every stage is exposed so that it can be tweaked before [Self::build] is
/// called, for example to make the generator live:
///
/// ```no_run
/// use switch_testsource::{
///     params::{Port, VideoSrcParams},
///     pipeline::VideoPipelineBuilder,
/// };
///
/// switch_testsource::initialize().unwrap();
///
/// let params = VideoSrcParams::new(Port::new(3000).unwrap());
/// let mut builder = VideoPipelineBuilder::new(&params).unwrap();
/// builder.src = builder.src.property("is-live", true);
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.stages().len(), 4);
/// ```
///
/// ## Pipeline Created
///
/// ```txt
/// src -> vfilter caps=geometry -> [timeoverlay] -> [clockoverlay] -> gdppay -> tcpclientsink
/// ```
///
/// The overlays are only added when enabled, in that order.
///
/// GStreamer must have been initialised with [crate::initialize] before a
/// builder is created.
pub struct VideoPipelineBuilder<'a> {
    /// The generator, a `videotestsrc`
    pub src: ElementBuilder<'a>,
    pub filter: ElementBuilder<'a>,
    pub timeoverlay: Option<ElementBuilder<'a>>,
    pub clockoverlay: Option<ElementBuilder<'a>>,
    pub pay: ElementBuilder<'a>,
    pub sink: ElementBuilder<'a>,
    params: VideoSrcParams,
}

impl VideoPipelineBuilder<'_> {
    /// Only fails if the geometry cannot be turned into caps
    pub fn new(params: &VideoSrcParams) -> Result<Self, BuilderError> {
        let caps = gst::Caps::from_str(&params.geometry.caps_description())?;

        Ok(Self {
            src: ElementFactory::make("videotestsrc")
                .name("src")
                .property_from_str("pattern", params.pattern.nick()),
            filter: ElementFactory::make("capsfilter")
                .name("vfilter")
                .property("caps", caps),
            timeoverlay: params
                .overlays
                .timeoverlay
                .then(|| overlay("timeoverlay")),
            clockoverlay: params
                .overlays
                .clockoverlay
                .then(|| overlay("clockoverlay")),
            pay: ElementFactory::make("gdppay").name("gdppay"),
            sink: tcp_client_sink(&params.endpoint),
            params: params.clone(),
        })
    }

    /// The parameters the stages were configured from.
    ///
    /// Properties changed directly on the stages afterwards are not tracked
    /// here.
    pub fn params(&self) -> &VideoSrcParams {
        &self.params
    }

    /// Creates every element and links them into a [PipelineGraph]
    pub fn build(self) -> Result<PipelineGraph, BuilderError> {
        let mut stages = vec![
            Stage::new(StageRole::Generator, self.src.build()?),
            Stage::new(StageRole::Filter, self.filter.build()?),
        ];

        if let Some(timeoverlay) = self.timeoverlay {
            stages.push(Stage::new(StageRole::TimeOverlay, timeoverlay.build()?));
        }
        if let Some(clockoverlay) = self.clockoverlay {
            stages.push(Stage::new(StageRole::ClockOverlay, clockoverlay.build()?));
        }

        stages.push(Stage::new(StageRole::Payloader, self.pay.build()?));
        stages.push(Stage::new(StageRole::TransportSink, self.sink.build()?));

        PipelineGraph::assemble(stages)
    }
}

fn overlay(factory: &str) -> ElementBuilder<'_> {
    ElementFactory::make(factory)
        .name(factory)
        .property("font-desc", OVERLAY_FONT)
}

/// A `tcpclientsink` sending to the given endpoint
pub(super) fn tcp_client_sink<'a>(endpoint: &StreamEndpoint) -> ElementBuilder<'a> {
    ElementFactory::make("tcpclientsink")
        .name("tcpclientsink")
        .property("host", endpoint.host())
        .property("port", i32::from(endpoint.port().get()))
}
