//! This stores the builder for the audio test source pipeline

use gst::{ElementFactory, element_factory::ElementBuilder};

use crate::{error::BuilderError, params::AudioSrcParams};

use super::{PipelineGraph, Stage, StageRole, video::tcp_client_sink};

/// Builds the pipeline behind a [crate::AudioSrc].
///
/// ## Pipeline Created
///
/// ```txt
/// audiosrc wave=wave -> gdppay -> tcpclientsink
/// ```
pub struct AudioPipelineBuilder<'a> {
    /// The generator, an `audiotestsrc`
    pub src: ElementBuilder<'a>,
    pub pay: ElementBuilder<'a>,
    pub sink: ElementBuilder<'a>,
    params: AudioSrcParams,
}

impl AudioPipelineBuilder<'_> {
    pub fn new(params: &AudioSrcParams) -> Self {
        Self {
            src: ElementFactory::make("audiotestsrc")
                .name("audiosrc")
                .property_from_str("wave", params.wave.nick()),
            pay: ElementFactory::make("gdppay").name("gdppay"),
            sink: tcp_client_sink(&params.endpoint),
            params: params.clone(),
        }
    }

    /// The parameters the stages were configured from
    pub fn params(&self) -> &AudioSrcParams {
        &self.params
    }

    /// Creates every element and links them into a [PipelineGraph]
    pub fn build(self) -> Result<PipelineGraph, BuilderError> {
        PipelineGraph::assemble(vec![
            Stage::new(StageRole::Generator, self.src.build()?),
            Stage::new(StageRole::Payloader, self.pay.build()?),
            Stage::new(StageRole::TransportSink, self.sink.build()?),
        ])
    }
}
