mod cli;
mod config;
mod session;

use anyhow::Context;
use clap::Parser;
use switch_testsource::params::{AudioSrcParams, FrameGeometry, OverlayFlags, VideoSrcParams};

use cli::{Args, Command};
use session::Session;

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = Args::parse();

    switch_testsource::initialize().context("Could not initialise GStreamer")?;

    let mut session = Session::default();
    match args.command {
        Command::Video {
            port,
            width,
            height,
            pattern,
            timeoverlay,
            clockoverlay,
        } => {
            let mut params = VideoSrcParams::new(port)
                .with_geometry(FrameGeometry::parse(&width, &height)?);
            params.overlays = OverlayFlags::new(timeoverlay, clockoverlay);
            if let Some(pattern) = pattern {
                params = params.with_pattern(pattern);
            }
            session.add_video(params)?;
        }
        Command::Audio { port, wave } => {
            let mut params = AudioSrcParams::new(port);
            if let Some(wave) = wave {
                params = params.with_wave(wave);
            }
            session.add_audio(params)?;
        }
        Command::Preview { port, sink } => {
            session.add_preview(port.into(), &sink)?;
        }
        Command::Run { config } => {
            let config = config::SessionConfig::load(&config)?;
            session.add_all(&config)?;
        }
    }

    let res = session.wait(args.seconds).await;
    session.end();
    res
}
