use std::{fmt, str::FromStr};

use super::{Param, ParamError, error::non_blank};

/// Every connection made by the pipelines goes through this address
pub const LOOPBACK: &str = "127.0.0.1";

/// A TCP port in the range `1..=65535`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(u16);

impl Port {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = u16::MAX;

    /// Zero counts as no port at all and is reported as blank
    pub fn new(port: i64) -> Result<Self, ParamError> {
        match u16::try_from(port) {
            Ok(0) => Err(ParamError::Blank(Param::Port)),
            Ok(p) => Ok(Self(p)),
            Err(_) => Err(ParamError::Range {
                param: Param::Port,
                expected: "in range 1 to 65535",
                value: port.to_string(),
            }),
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for Port {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = non_blank(Param::Port, s)?;
        let port = raw.parse::<i64>().map_err(|_| ParamError::TypeMismatch {
            param: Param::Port,
            expected: "a whole number",
            value: raw.to_string(),
        })?;

        Self::new(port)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Port> for u16 {
    fn from(value: Port) -> Self {
        value.0
    }
}

/// The TCP rendezvous point between a source pipeline and the switch server,
/// or between the switch server and a preview pipeline.
///
/// The host is always [LOOPBACK].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamEndpoint {
    port: Port,
}

impl StreamEndpoint {
    pub const fn new(port: Port) -> Self {
        Self { port }
    }

    pub const fn host(&self) -> &'static str {
        LOOPBACK
    }

    pub const fn port(&self) -> Port {
        self.port
    }
}

impl From<Port> for StreamEndpoint {
    fn from(value: Port) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for StreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host(), self.port)
    }
}
