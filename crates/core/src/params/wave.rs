use std::{fmt, str::FromStr};

use rand::Rng;

use super::{
    Param, ParamError,
    id::{check_id, parse_id},
};

/// `audiotestsrc` wave nicks, indexed by the wave id
const NICKS: [&str; 13] = [
    "sine",
    "square",
    "saw",
    "triangle",
    "silence",
    "white-noise",
    "pink-noise",
    "sine-table",
    "ticks",
    "gaussian-noise",
    "red-noise",
    "blue-noise",
    "violet-noise",
];

/// The waveform generated by an audio test source, in the range `0..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wave(u8);

impl Wave {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 12;

    const EXPECTED: &'static str = "in range 0 to 12";

    pub fn new(wave: i64) -> Result<Self, ParamError> {
        check_id(Param::Wave, wave, Self::MAX, Self::EXPECTED).map(Self)
    }

    pub fn random() -> Self {
        Self(rand::rng().random_range(Self::MIN..=Self::MAX))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn nick(self) -> &'static str {
        NICKS[self.0 as usize]
    }
}

impl FromStr for Wave {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(Param::Wave, s, Self::MAX, Self::EXPECTED).map(Self)
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!("2".parse::<Wave>().map(Wave::nick), Ok("saw"));
        assert_eq!("8".parse::<Wave>().map(Wave::nick), Ok("ticks"));
        assert_eq!("".parse::<Wave>(), Err(ParamError::Blank(Param::Wave)));
        assert!(matches!(
            "13".parse::<Wave>(),
            Err(ParamError::Range { .. })
        ));
        assert!(matches!(
            "ticks".parse::<Wave>(),
            Err(ParamError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn random_in_range() {
        for _ in 0..200 {
            assert!(Wave::random().get() <= Wave::MAX);
        }
    }
}
