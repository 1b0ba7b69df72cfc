use std::fmt;

use super::{Param, ParamError, error::non_blank};

/// The size of the frames generated by a video test source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    width: f64,
    height: f64,
}

impl FrameGeometry {
    pub const DEFAULT_WIDTH: f64 = 300.0;
    pub const DEFAULT_HEIGHT: f64 = 200.0;

    /// Both values must be finite and greater than zero, a zero is reported
    /// as blank
    pub fn new(width: f64, height: f64) -> Result<Self, ParamError> {
        Ok(Self {
            width: dimension(Param::Width, width)?,
            height: dimension(Param::Height, height)?,
        })
    }

    /// Parses the raw width and height, checking the width first
    pub fn parse(width: &str, height: &str) -> Result<Self, ParamError> {
        Ok(Self {
            width: parse_dimension(Param::Width, width)?,
            height: parse_dimension(Param::Height, height)?,
        })
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The caps description used by the filter stage of a video source
    pub fn caps_description(&self) -> String {
        format!(
            "video/x-raw, format=(string)I420, width={}, height={}",
            CapsNumber(self.width),
            CapsNumber(self.height),
        )
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for FrameGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", CapsNumber(self.width), CapsNumber(self.height))
    }
}

/// Whole numbers are written without a fraction so the caps parser reads
/// them as integers
struct CapsNumber(f64);

impl fmt::Display for CapsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn dimension(param: Param, value: f64) -> Result<f64, ParamError> {
    if !value.is_finite() {
        return Err(ParamError::TypeMismatch {
            param,
            expected: "a real number",
            value: value.to_string(),
        });
    }

    if value == 0.0 {
        return Err(ParamError::Blank(param));
    }

    if value < 0.0 {
        return Err(ParamError::Range {
            param,
            expected: "a positive value",
            value: value.to_string(),
        });
    }

    Ok(value)
}

fn parse_dimension(param: Param, raw: &str) -> Result<f64, ParamError> {
    let raw = non_blank(param, raw)?;
    let value = raw.parse::<f64>().map_err(|_| ParamError::TypeMismatch {
        param,
        expected: "a real number",
        value: raw.to_string(),
    })?;

    dimension(param, value)
}
