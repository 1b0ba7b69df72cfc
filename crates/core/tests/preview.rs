mod utils;

use std::error::Error;

use switch_testsource::{
    Lifecycle, Preview, VideoSrc,
    gst::State,
    params::{Port, VideoSrcParams},
    pipeline::{PipelineState, PreviewPipelineBuilder, StageRole},
};
use testlibs::{elements, relay::Relay};
use utils::{endpoint, settled_state, setup};

#[test]
fn stays_stopped_until_run() -> Result<(), Box<dyn Error>> {
    if !setup(&[elements::PREVIEW, &["autovideosink"]])? {
        return Ok(());
    }

    let preview = Preview::new(endpoint(5000))?;

    assert_eq!(
        preview.pipeline().roles(),
        vec![
            StageRole::TransportSource,
            StageRole::Depayloader,
            StageRole::DisplaySink,
        ]
    );
    assert_eq!(preview.state(), PipelineState::Null);
    assert!(!preview.is_playing());
    assert_eq!(preview.endpoint().port().get(), 5000);

    Ok(())
}

#[test]
fn shows_relayed_source() -> Result<(), Box<dyn Error>> {
    if !setup(&[elements::VIDEO_SRC, elements::PREVIEW])? {
        return Ok(());
    }

    let relay = Relay::bind()?;
    let mut src = VideoSrc::new(VideoSrcParams::new(Port::new(
        relay.source_port().into(),
    )?))?;

    let preview_endpoint = endpoint(relay.preview_port());
    let mut preview = Preview::with_builder(
        PreviewPipelineBuilder::new(&preview_endpoint).with_display_sink("fakesink"),
    )?;
    assert_eq!(preview.endpoint(), preview_endpoint);

    preview.run()?;
    assert!(preview.is_playing());
    assert_eq!(
        settled_state(preview.pipeline().raw()),
        State::Playing,
        "The preview prerolls from the relayed stream"
    );

    preview.pause()?;
    assert_eq!(preview.state(), PipelineState::Paused);

    preview.end()?;
    src.end()?;
    assert_eq!(preview.state(), PipelineState::Null);

    Ok(())
}
