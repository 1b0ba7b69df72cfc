//! The pipeline graph shared by every test source and preview, along with the
//! builders for each fixed topology.

#[cfg(feature = "audio")]
mod audio;
mod preview;
mod utils;
mod video;
mod wrappers;

#[cfg(feature = "audio")]
pub use audio::*;
pub use preview::*;
pub use utils::{BusMessages, get_bus_messages};
pub use video::*;
pub use wrappers::*;

use gst::prelude::{ElementExt, ElementExtManual, GstBinExtManual, GstObjectExt};

use crate::error::{BuilderError, StreamError};

/// What a stage does within the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageRole {
    Generator,
    Filter,
    TimeOverlay,
    ClockOverlay,
    Payloader,
    TransportSink,
    TransportSource,
    Depayloader,
    DisplaySink,
}

/// One element of the chain
#[derive(Debug, Clone)]
pub struct Stage {
    pub role: StageRole,
    pub element: gst::Element,
}

impl Stage {
    pub fn new(role: StageRole, element: gst::Element) -> Self {
        Self { role, element }
    }

    /// The unique name of the element within its pipeline
    pub fn name(&self) -> String {
        self.element.name().to_string()
    }
}

/// The run state of a [PipelineGraph]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PipelineState {
    #[default]
    Null,
    Paused,
    Playing,
}

impl From<PipelineState> for gst::State {
    fn from(value: PipelineState) -> Self {
        match value {
            PipelineState::Null => gst::State::Null,
            PipelineState::Paused => gst::State::Paused,
            PipelineState::Playing => gst::State::Playing,
        }
    }
}

/// A linear chain of stages inside a [gst::Pipeline], which is owned by a
/// single test source or preview.
///
/// The graph is shut down to [PipelineState::Null] when dropped.
#[derive(Debug)]
pub struct PipelineGraph {
    pipe: gst::Pipeline,
    stages: Vec<Stage>,
    state: PipelineState,
}

impl PipelineGraph {
    /// Adds every stage to a new pipeline and only then links them in order
    pub fn assemble(stages: Vec<Stage>) -> Result<Self, BuilderError> {
        let pipe = gst::Pipeline::new();

        pipe.add_many(stages.iter().map(|s| &s.element))?;
        gst::Element::link_many(stages.iter().map(|s| &s.element))?;

        tracing::debug!(
            pipeline = %pipe.name(),
            stages = ?stages.iter().map(Stage::name).collect::<Vec<_>>(),
            "Assembled pipeline"
        );

        Ok(Self {
            pipe,
            stages,
            state: PipelineState::Null,
        })
    }

    pub const fn raw(&self) -> &gst::Pipeline {
        &self.pipe
    }

    /// Every stage in link order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn roles(&self) -> Vec<StageRole> {
        self.stages.iter().map(|s| s.role).collect()
    }

    /// The first stage with the given role
    pub fn stage(&self, role: StageRole) -> Option<&Stage> {
        self.stages.iter().find(|s| s.role == role)
    }

    /// The last state this graph was successfully set to
    pub const fn state(&self) -> PipelineState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PipelineState::Playing
    }

    /// Sets the pipeline to the [gst::State::Playing] state
    pub fn play(&mut self) -> Result<(), StreamError> {
        self.transition(PipelineState::Playing)
    }

    /// Sets the pipeline to the [gst::State::Paused] state
    pub fn pause(&mut self) -> Result<(), StreamError> {
        self.transition(PipelineState::Paused)
    }

    /// Sets the pipeline to the [gst::State::Null] state, releasing the
    /// sockets and everything else the elements hold on to
    pub fn disable(&mut self) -> Result<(), StreamError> {
        self.transition(PipelineState::Null)
    }

    /// Drains the errors and warnings posted on the pipeline's bus since the
    /// last call
    pub fn bus_messages(&self) -> BusMessages {
        match self.pipe.bus() {
            Some(bus) => get_bus_messages(&bus),
            None => BusMessages::default(),
        }
    }

    /// The current position of the stream, if the pipeline has one
    pub fn position(&self) -> Option<gst::ClockTime> {
        self.pipe.query_position::<gst::ClockTime>()
    }

    fn transition(&mut self, to: PipelineState) -> Result<(), StreamError> {
        tracing::debug!(pipeline = %self.pipe.name(), from = ?self.state, ?to, "Changing state");

        match self.pipe.set_state_blocking(to.into()) {
            Ok(()) => {
                self.state = to;
                Ok(())
            }
            Err(e) => {
                self.state = state_after_failure(self.state, to);
                Err(e)
            }
        }
    }
}

/// A failed change shuts the pipeline down, unless shutting down is what
/// failed, in which case it is left as it was so dropping tries again
const fn state_after_failure(from: PipelineState, to: PipelineState) -> PipelineState {
    match to {
        PipelineState::Null => from,
        PipelineState::Paused | PipelineState::Playing => PipelineState::Null,
    }
}

impl Drop for PipelineGraph {
    fn drop(&mut self) {
        if self.state == PipelineState::Null {
            return;
        }

        if let Err(e) = self.pipe.set_state(gst::State::Null) {
            tracing::warn!(pipeline = %self.pipe.name(), "Could not shut down pipeline: {e}");
        }
    }
}
