use super::{Param, ParamError};

/// Which text overlays are drawn on top of a video test source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OverlayFlags {
    /// Running time of the stream
    pub timeoverlay: bool,
    /// Current wall clock time
    pub clockoverlay: bool,
}

impl OverlayFlags {
    pub const fn new(timeoverlay: bool, clockoverlay: bool) -> Self {
        Self {
            timeoverlay,
            clockoverlay,
        }
    }

    pub fn parse(timeoverlay: &str, clockoverlay: &str) -> Result<Self, ParamError> {
        Ok(Self {
            timeoverlay: parse_flag(Param::TimeOverlay, timeoverlay)?,
            clockoverlay: parse_flag(Param::ClockOverlay, clockoverlay)?,
        })
    }
}

/// Reads one of the boolean literals `True`, `False`, `true` or `false`.
///
/// No other spelling is accepted, not even with surrounding whitespace.
pub fn parse_flag(param: Param, raw: &str) -> Result<bool, ParamError> {
    match raw {
        "True" | "true" => Ok(true),
        "False" | "false" => Ok(false),
        _ => Err(ParamError::Value {
            param,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_literals() {
        assert_eq!(
            OverlayFlags::parse("True", "false"),
            Ok(OverlayFlags::new(true, false))
        );
        assert_eq!(
            OverlayFlags::parse("False", "true"),
            Ok(OverlayFlags::new(false, true))
        );
    }

    #[test]
    fn anything_else() {
        for raw in ["maybe", "", "1", "0", "yes", "TRUE", " True"] {
            assert_eq!(
                parse_flag(Param::TimeOverlay, raw),
                Err(ParamError::Value {
                    param: Param::TimeOverlay,
                    value: raw.to_string(),
                }),
                "{raw:?} is not a boolean literal"
            );
        }

        assert!(matches!(
            OverlayFlags::parse("True", "maybe"),
            Err(ParamError::Value {
                param: Param::ClockOverlay,
                ..
            })
        ));
    }
}
