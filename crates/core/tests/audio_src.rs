#![cfg(feature = "audio")]

mod utils;

use std::{error::Error, time::Duration};

use switch_testsource::{
    AudioSrc, Lifecycle,
    params::{AudioSrcParams, Port, Wave},
    pipeline::{PipelineState, StageRole},
};
use testlibs::{elements, server::StubServer};
use utils::setup;

#[test]
fn streams_wave() -> Result<(), Box<dyn Error>> {
    if !setup(&[elements::AUDIO_SRC])? {
        return Ok(());
    }

    let server = StubServer::bind()?;
    let mut src =
        AudioSrc::new(AudioSrcParams::new(Port::new(server.port().into())?).with_wave(Wave::new(2)?))?;

    assert_eq!(
        src.pipeline().roles(),
        vec![
            StageRole::Generator,
            StageRole::Payloader,
            StageRole::TransportSink,
        ]
    );
    assert!(src.is_playing());
    assert!(
        server.wait_for_bytes(1, Duration::from_secs(5)),
        "The server receives the stream"
    );

    src.end()?;
    assert_eq!(src.state(), PipelineState::Null);

    Ok(())
}
