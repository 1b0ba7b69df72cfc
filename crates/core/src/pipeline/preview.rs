//! This stores the builder for the preview pipeline

use gst::{ElementFactory, element_factory::ElementBuilder};

use crate::{error::BuilderError, params::StreamEndpoint};

use super::{PipelineGraph, Stage, StageRole};

/// Builds the pipeline behind a [crate::Preview].
///
/// ## Pipeline Created
///
/// ```txt
/// tcpclientsrc -> gdpdepay -> autovideosink
/// ```
///
/// The display sink can be swapped out, e.g. for a `fakesink` when there is
/// no display to draw on:
///
/// ```no_run
/// use switch_testsource::{
///     params::{Port, StreamEndpoint},
///     pipeline::PreviewPipelineBuilder,
/// };
///
/// switch_testsource::initialize().unwrap();
///
/// let endpoint = StreamEndpoint::new(Port::new(3003).unwrap());
/// let graph = PreviewPipelineBuilder::new(&endpoint)
///     .with_display_sink("fakesink")
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.stages().len(), 3);
/// ```
pub struct PreviewPipelineBuilder<'a> {
    pub src: ElementBuilder<'a>,
    pub depay: ElementBuilder<'a>,
    pub sink: ElementBuilder<'a>,
    endpoint: StreamEndpoint,
}

impl<'a> PreviewPipelineBuilder<'a> {
    pub fn new(endpoint: &StreamEndpoint) -> Self {
        Self {
            src: ElementFactory::make("tcpclientsrc")
                .name("tcpclientsrc")
                .property("host", endpoint.host())
                .property("port", i32::from(endpoint.port().get())),
            depay: ElementFactory::make("gdpdepay").name("gdpdepay"),
            sink: ElementFactory::make("autovideosink").name("autovideosink"),
            endpoint: *endpoint,
        }
    }

    /// Where the source stage reads from
    pub const fn endpoint(&self) -> StreamEndpoint {
        self.endpoint
    }

    /// Replaces the `autovideosink` with an element made by the given
    /// factory
    pub fn with_display_sink(mut self, factory: &'a str) -> Self {
        self.sink = ElementFactory::make(factory).name(factory);
        self
    }

    /// Creates every element and links them into a [PipelineGraph]
    pub fn build(self) -> Result<PipelineGraph, BuilderError> {
        PipelineGraph::assemble(vec![
            Stage::new(StageRole::TransportSource, self.src.build()?),
            Stage::new(StageRole::Depayloader, self.depay.build()?),
            Stage::new(StageRole::DisplaySink, self.sink.build()?),
        ])
    }
}
