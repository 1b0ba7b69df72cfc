use thiserror::Error;

use crate::params::ParamError;

/// Errors posted by GStreamer while a pipeline changes state
pub type StreamError = glib::Error;

/// Errors from GStreamer while creating, adding or linking elements
pub type BuilderError = glib::BoolError;

/// These are all the different types of errors which could arise while
/// creating or running a test source or preview
#[derive(Error, Debug)]
pub enum Error {
    #[error("GStreamer has not been initialised, call `initialize` first")]
    NotInitialized,
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Stream(#[from] StreamError),
}
