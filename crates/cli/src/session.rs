use std::time::Duration;

use anyhow::{Context, bail};
use switch_testsource::{
    AudioSrc, Lifecycle, Preview, VideoSrc,
    params::{AudioSrcParams, StreamEndpoint, VideoSrcParams},
    pipeline::PreviewPipelineBuilder,
};
use tokio::time;

use crate::config::SessionConfig;

/// How often the pipelines are checked for errors while running
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Every source and preview started by this process
#[derive(Default)]
pub struct Session {
    running: Vec<(String, Box<dyn Lifecycle>)>,
}

impl Session {
    pub fn add_video(&mut self, params: VideoSrcParams) -> anyhow::Result<()> {
        let name = format!("video {}", params.endpoint);
        let src = VideoSrc::new(params).with_context(|| format!("Could not start {name}"))?;
        tracing::info!(pattern = src.params().pattern.nick(), "Started {name}");
        self.running.push((name, Box::new(src)));
        Ok(())
    }

    pub fn add_audio(&mut self, params: AudioSrcParams) -> anyhow::Result<()> {
        let name = format!("audio {}", params.endpoint);
        let src = AudioSrc::new(params).with_context(|| format!("Could not start {name}"))?;
        tracing::info!(wave = src.params().wave.nick(), "Started {name}");
        self.running.push((name, Box::new(src)));
        Ok(())
    }

    pub fn add_preview(&mut self, endpoint: StreamEndpoint, sink: &str) -> anyhow::Result<()> {
        let name = format!("preview {endpoint}");
        let builder = PreviewPipelineBuilder::new(&endpoint).with_display_sink(sink);
        let mut preview = Preview::with_builder(builder)
            .with_context(|| format!("Could not create {name}"))?;
        preview
            .run()
            .with_context(|| format!("Could not start {name}"))?;
        tracing::info!(sink, "Started {name}");
        self.running.push((name, Box::new(preview)));
        Ok(())
    }

    /// Starts the sources before the previews, as a preview needs the switch
    /// server to already have something to show
    pub fn add_all(&mut self, config: &SessionConfig) -> anyhow::Result<()> {
        for video in &config.video {
            self.add_video(video.params()?)?;
        }
        for audio in &config.audio {
            self.add_audio(audio.params()?)?;
        }
        for preview in &config.preview {
            self.add_preview(preview.endpoint()?, preview.sink())?;
        }
        Ok(())
    }

    /// Runs until the time is up, Ctrl-C is pressed or a pipeline reports an
    /// error
    pub async fn wait(&mut self, seconds: Option<u64>) -> anyhow::Result<()> {
        if self.running.is_empty() {
            bail!("Nothing to run");
        }

        let deadline = async {
            match seconds {
                Some(s) => time::sleep(Duration::from_secs(s)).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(deadline);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut poll = time::interval(POLL_INTERVAL);

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    tracing::info!("Time is up");
                    return Ok(());
                }
                res = &mut ctrl_c => {
                    res.context("Could not listen for Ctrl-C")?;
                    tracing::info!("Interrupted");
                    return Ok(());
                }
                _ = poll.tick() => self.check_pipelines()?,
            }
        }
    }

    fn check_pipelines(&self) -> anyhow::Result<()> {
        for (name, item) in &self.running {
            let messages = item.pipeline().bus_messages();
            for w in &messages.warnings {
                tracing::warn!("{name}: {w}");
            }
            if let Some(first) = messages.errors.first() {
                for e in &messages.errors[1..] {
                    tracing::error!("{name}: {e}");
                }
                bail!("{name} failed: {first}");
            }

            if let Some(position) = item.pipeline().position() {
                tracing::trace!(%position, "{name} running");
            }
        }
        Ok(())
    }

    /// Stops everything, logging rather than returning failures so every
    /// pipeline gets the chance to stop
    pub fn end(&mut self) {
        for (name, mut item) in self.running.drain(..) {
            match item.end() {
                Ok(()) => tracing::info!("Stopped {name}"),
                Err(e) => tracing::error!("Could not stop {name}: {e}"),
            }
        }
    }
}
