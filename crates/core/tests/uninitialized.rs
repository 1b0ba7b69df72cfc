use switch_testsource::{
    Error, Preview, VideoSrc,
    params::{Port, StreamEndpoint, VideoSrcParams},
};

// Runs in its own test binary so nothing else has initialised GStreamer
#[test]
fn requires_initialize() {
    let port = Port::new(3000).expect("3000 is a valid port");

    assert!(!switch_testsource::is_initialized());
    assert!(matches!(
        VideoSrc::new(VideoSrcParams::new(port)),
        Err(Error::NotInitialized)
    ));
    assert!(matches!(
        Preview::new(StreamEndpoint::new(port)),
        Err(Error::NotInitialized)
    ));
}
