//! Shared checks for enumerated element properties, which are picked by a
//! small integer id and set on the element through a nick table.

use super::{Param, ParamError, error::non_blank};

/// Checks `id` against `0..=max`, where `expected` is the message used for
/// a value outside of it
pub(super) fn check_id(
    param: Param,
    id: i64,
    max: u8,
    expected: &'static str,
) -> Result<u8, ParamError> {
    match u8::try_from(id) {
        Ok(id) if id <= max => Ok(id),
        _ => Err(ParamError::Range {
            param,
            expected,
            value: id.to_string(),
        }),
    }
}

/// Reads a whole number id, names are not accepted
pub(super) fn parse_id(
    param: Param,
    raw: &str,
    max: u8,
    expected: &'static str,
) -> Result<u8, ParamError> {
    let raw = non_blank(param, raw)?;
    let id = raw.parse::<i64>().map_err(|_| ParamError::TypeMismatch {
        param,
        expected: "a whole number",
        value: raw.to_string(),
    })?;

    check_id(param, id, max, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(check_id(Param::Wave, 0, 12, "in range 0 to 12"), Ok(0));
        assert_eq!(check_id(Param::Wave, 12, 12, "in range 0 to 12"), Ok(12));
        assert_eq!(
            check_id(Param::Wave, 13, 12, "in range 0 to 12"),
            Err(ParamError::Range {
                param: Param::Wave,
                expected: "in range 0 to 12",
                value: "13".to_string(),
            })
        );
        assert!(check_id(Param::Pattern, -1, 19, "in range 0 to 19").is_err());
    }

    #[test]
    fn names_are_not_ids() {
        assert_eq!(
            parse_id(Param::Pattern, "ball", 19, "in range 0 to 19"),
            Err(ParamError::TypeMismatch {
                param: Param::Pattern,
                expected: "a whole number",
                value: "ball".to_string(),
            })
        );
        assert_eq!(parse_id(Param::Pattern, " 18 ", 19, "in range 0 to 19"), Ok(18));
        assert_eq!(
            parse_id(Param::Pattern, "", 19, "in range 0 to 19"),
            Err(ParamError::Blank(Param::Pattern))
        );
    }
}
