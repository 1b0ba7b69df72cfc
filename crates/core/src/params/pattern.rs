use std::{fmt, str::FromStr};

use rand::Rng;

use super::{
    Param, ParamError,
    id::{check_id, parse_id},
};

/// `videotestsrc` pattern nicks, indexed by the pattern id
const NICKS: [&str; 20] = [
    "smpte",
    "snow",
    "black",
    "white",
    "red",
    "green",
    "blue",
    "checkers-1",
    "checkers-2",
    "checkers-4",
    "checkers-8",
    "circular",
    "blink",
    "smpte75",
    "zone-plate",
    "gamut",
    "chroma-zone-plate",
    "solid-color",
    "ball",
    "smpte100",
];

/// The picture drawn by a video test source, in the range `0..=19`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 19;

    const EXPECTED: &'static str = "in range 0 to 19";

    pub fn new(pattern: i64) -> Result<Self, ParamError> {
        check_id(Param::Pattern, pattern, Self::MAX, Self::EXPECTED).map(Self)
    }

    /// Picks any valid pattern, never 20 which [Self::new] rejects
    pub fn random() -> Self {
        Self(rand::rng().random_range(Self::MIN..=Self::MAX))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The name `videotestsrc` knows this pattern by
    pub const fn nick(self) -> &'static str {
        NICKS[self.0 as usize]
    }
}

/// Only the pattern id is accepted, not its nick
impl FromStr for Pattern {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(Param::Pattern, s, Self::MAX, Self::EXPECTED).map(Self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Pattern::new(0).map(Pattern::nick), Ok("smpte"));
        assert_eq!(Pattern::new(19).map(Pattern::nick), Ok("smpte100"));

        for invalid in [-1, 20, 255, 256] {
            assert!(
                matches!(Pattern::new(invalid), Err(ParamError::Range { .. })),
                "{invalid} is not a pattern"
            );
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("5".parse::<Pattern>(), Ok(Pattern(5)));
        assert_eq!("18".parse::<Pattern>().map(Pattern::nick), Ok("ball"));

        assert_eq!(
            "".parse::<Pattern>(),
            Err(ParamError::Blank(Param::Pattern))
        );
        for name in ["ball", "Zone-Plate", "stripes"] {
            assert!(
                matches!(
                    name.parse::<Pattern>(),
                    Err(ParamError::TypeMismatch {
                        param: Param::Pattern,
                        ..
                    })
                ),
                "{name} is not a pattern id"
            );
        }
        assert!(matches!(
            "20".parse::<Pattern>(),
            Err(ParamError::Range { .. })
        ));
    }

    #[test]
    fn normalised_as_integer_string() {
        assert_eq!(Pattern(7).to_string(), "7");
    }

    // Drawing from 0..=20 would fail one time in 21 when no pattern is
    // given, so only 0..=19 may come out.
    #[test]
    fn random_never_out_of_range() {
        for _ in 0..1000 {
            let pattern = Pattern::random();
            assert!(
                Pattern::new(pattern.get() as i64).is_ok(),
                "{pattern} is a valid pattern"
            );
        }
    }
}
