use crate::{
    error::Error,
    init::ensure_initialized,
    lifecycle::Lifecycle,
    params::StreamEndpoint,
    pipeline::{PipelineGraph, PreviewPipelineBuilder},
};

/// Shows a stream served over TCP, e.g. one of the preview ports of
/// gst-switch-srv.
///
/// Unlike the sources this stays stopped until [Lifecycle::run] is called.
#[derive(Debug)]
pub struct Preview {
    endpoint: StreamEndpoint,
    pipeline: PipelineGraph,
}

impl Preview {
    pub fn new(endpoint: StreamEndpoint) -> Result<Self, Error> {
        ensure_initialized()?;
        Self::with_builder(PreviewPipelineBuilder::new(&endpoint))
    }

    pub fn with_builder(builder: PreviewPipelineBuilder<'_>) -> Result<Self, Error> {
        ensure_initialized()?;

        let endpoint = builder.endpoint();
        tracing::debug!(%endpoint, "Creating preview");

        Ok(Self {
            endpoint,
            pipeline: builder.build()?,
        })
    }

    pub const fn endpoint(&self) -> StreamEndpoint {
        self.endpoint
    }
}

impl Lifecycle for Preview {
    fn pipeline(&self) -> &PipelineGraph {
        &self.pipeline
    }

    fn pipeline_mut(&mut self) -> &mut PipelineGraph {
        &mut self.pipeline
    }
}
