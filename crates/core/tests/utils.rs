#![allow(dead_code)]

use std::error::Error;

use switch_testsource::{
    gst,
    params::{Port, StreamEndpoint},
};

/// Initialises GStreamer and checks the elements the test needs exist.
///
/// Returns false (and says why) if the test should be skipped because a
/// plugin is not installed.
pub fn setup(required: &[&[&str]]) -> Result<bool, Box<dyn Error>> {
    switch_testsource::initialize()?;

    let required = required.iter().flat_map(|r| r.iter().copied()).collect::<Vec<_>>();
    let missing = testlibs::missing_elements(&required);
    if !missing.is_empty() {
        eprintln!("Skipping, missing GStreamer elements: {missing:?}");
        return Ok(false);
    }

    Ok(true)
}

pub fn endpoint(port: u16) -> StreamEndpoint {
    StreamEndpoint::new(Port::new(port.into()).expect("OS ports are never 0"))
}

/// The state GStreamer reports once any pending change has finished
pub fn settled_state(pipe: &gst::Pipeline) -> gst::State {
    use gst::prelude::ElementExt;

    let (_, current, _) = pipe.state(gst::ClockTime::from_seconds(5));
    current
}
