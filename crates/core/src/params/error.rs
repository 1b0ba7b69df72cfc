use std::fmt;

use thiserror::Error;

/// The parameter a [ParamError] is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Port,
    Width,
    Height,
    Pattern,
    TimeOverlay,
    ClockOverlay,
    Wave,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Param::Port => "Port",
            Param::Width => "Width",
            Param::Height => "Height",
            Param::Pattern => "Pattern",
            Param::TimeOverlay => "Timeoverlay",
            Param::ClockOverlay => "Clockoverlay",
            Param::Wave => "Wave",
        };
        f.write_str(name)
    }
}

/// Stores all the ways a construction parameter can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Nothing was given
    #[error("{0} cannot be blank")]
    Blank(Param),
    /// The value could not be read as the type the parameter needs
    #[error("{param} must be {expected}, not '{value}'")]
    TypeMismatch {
        param: Param,
        expected: &'static str,
        value: String,
    },
    /// The value was read but is outside of what is allowed
    #[error("{param} must be {expected}, got '{value}'")]
    Range {
        param: Param,
        expected: &'static str,
        value: String,
    },
    /// Only used for flags, which must be one of the boolean literals
    #[error("{param}: '{value}' must be True or False")]
    Value { param: Param, value: String },
}

impl ParamError {
    /// The parameter which was rejected
    pub fn param(&self) -> Param {
        match self {
            ParamError::Blank(param)
            | ParamError::TypeMismatch { param, .. }
            | ParamError::Range { param, .. }
            | ParamError::Value { param, .. } => *param,
        }
    }
}

/// Trims the raw value, failing if there is nothing left
pub(super) fn non_blank(param: Param, raw: &str) -> Result<&str, ParamError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ParamError::Blank(param))
    } else {
        Ok(trimmed)
    }
}
