use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use switch_testsource::params::{Param, ParamError, Pattern, Port, Wave, parse_flag};

#[derive(Parser, Debug)]
#[command(author, version, about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
pub struct Args {
    /// Stop after this many seconds instead of waiting for Ctrl-C
    #[arg(long, global = true, env = "TESTSOURCE_SECONDS")]
    pub seconds: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stream a video test pattern to a port of the switch server
    Video {
        #[arg(long, env = "TESTSOURCE_PORT")]
        port: Port,
        #[arg(long, default_value = "300")]
        width: String,
        #[arg(long, default_value = "200")]
        height: String,
        /// Pattern id (0-19), random if not given
        #[arg(long)]
        pattern: Option<Pattern>,
        /// Draw the running time over the video (True or False)
        #[arg(long, default_value = "False", action = ArgAction::Set, value_parser = timeoverlay)]
        timeoverlay: bool,
        /// Draw the wall clock time over the video (True or False)
        #[arg(long, default_value = "False", action = ArgAction::Set, value_parser = clockoverlay)]
        clockoverlay: bool,
    },
    /// Stream an audio test wave to a port of the switch server
    Audio {
        #[arg(long, env = "TESTSOURCE_PORT")]
        port: Port,
        /// Wave id (0-12), random if not given
        #[arg(long)]
        wave: Option<Wave>,
    },
    /// Show the stream served on a port of the switch server
    Preview {
        #[arg(long, env = "TESTSOURCE_PORT")]
        port: Port,
        /// Element factory used to display the video
        #[arg(long, default_value = "autovideosink")]
        sink: String,
    },
    /// Start every source and preview listed in a JSON file
    Run {
        #[arg(long)]
        config: PathBuf,
    },
}

fn timeoverlay(raw: &str) -> Result<bool, ParamError> {
    parse_flag(Param::TimeOverlay, raw)
}

fn clockoverlay(raw: &str) -> Result<bool, ParamError> {
    parse_flag(Param::ClockOverlay, raw)
}
