use crate::{
    error::StreamError,
    pipeline::{PipelineGraph, PipelineState},
};

/// The play/pause/end controls shared by every test source and preview,
/// delegating to the [PipelineGraph] each one owns
pub trait Lifecycle {
    fn pipeline(&self) -> &PipelineGraph;

    fn pipeline_mut(&mut self) -> &mut PipelineGraph;

    /// Start, or resume, streaming
    fn run(&mut self) -> Result<(), StreamError> {
        self.pipeline_mut().play()
    }

    fn pause(&mut self) -> Result<(), StreamError> {
        self.pipeline_mut().pause()
    }

    /// Stops the pipeline, closing its connection
    fn end(&mut self) -> Result<(), StreamError> {
        self.pipeline_mut().disable()
    }

    fn state(&self) -> PipelineState {
        self.pipeline().state()
    }

    fn is_playing(&self) -> bool {
        self.pipeline().is_playing()
    }
}
