use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use crate::{
    error::MalformedInput,
    input::{EncodedValue, InputDocument},
    params::{is_supported_radix, MAX_RADIX, MIN_RADIX},
    points::PointRecord,
};

/// Points decoded from a document, in enumeration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInput {
    pub points: Vec<PointRecord>,
    pub n: usize,
    pub k: usize,
}

/// Decode every entry of `document` into a [`PointRecord`].
pub fn decode_points(
    document: &InputDocument,
) -> Result<DecodedInput, MalformedInput> {
    let keys = document.keys();
    if keys.k == 0 {
        return Err(MalformedInput::ZeroThreshold);
    }

    let points = document
        .entries()
        .iter()
        .map(|(key, entry)| decode_entry(key, entry))
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() != keys.n {
        warn!(
            declared = keys.n,
            found = points.len(),
            "point count differs from keys.n"
        );
    }
    debug!(n = keys.n, k = keys.k, points = points.len(), "decoded document");

    Ok(DecodedInput {
        points,
        n: keys.n,
        k: keys.k,
    })
}

/// Decode one keyed entry: the key is the x-coordinate, the value the y.
pub fn decode_entry(
    key: &str,
    entry: &EncodedValue,
) -> Result<PointRecord, MalformedInput> {
    let x = parse_x(key)?;
    let base = entry.base.value()?;
    if !is_supported_radix(base) {
        return Err(MalformedInput::UnsupportedBase(base));
    }
    // Range checked above.
    let y = decode_value(&entry.value, base as u32)?;
    Ok(PointRecord { x, y })
}

/// Parse an entry key as a base-10 x-coordinate.
pub fn parse_x(key: &str) -> Result<i64, MalformedInput> {
    key.parse::<i64>()
        .map_err(|_| MalformedInput::InvalidKey(key.to_owned()))
}

/// Decode `value` as a positional numeral in `base` (2..=36).
///
/// Digits are `0-9` followed by `a-z`, case-insensitive. Signs, whitespace
/// and separators are rejected.
pub fn decode_value(value: &str, base: u32) -> Result<BigUint, MalformedInput> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(MalformedInput::UnsupportedBase(u64::from(base)));
    }
    if value.is_empty() {
        return Err(MalformedInput::EmptyValue);
    }

    let mut result = BigUint::zero();
    for (position, ch) in value.chars().enumerate() {
        let digit = ch.to_digit(base).ok_or(MalformedInput::InvalidDigit {
            digit: ch,
            position,
            base,
        })?;
        result = result * base + digit;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Keys;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    fn doc(k: usize, entries: &[(&str, u32, &str)]) -> InputDocument {
        InputDocument::new(
            Keys {
                n: entries.len(),
                k,
            },
            entries
                .iter()
                .map(|&(key, base, value)| {
                    (key.to_owned(), EncodedValue::new(base, value))
                })
                .collect(),
        )
    }

    #[test]
    fn decodes_the_worked_example() {
        let decoded = decode_points(&doc(
            3,
            &[
                ("1", 10, "4"),
                ("2", 2, "111"),
                ("3", 10, "12"),
                ("6", 4, "213"),
            ],
        ))
        .unwrap();
        let expected: Vec<PointRecord> = [(1, 4), (2, 7), (3, 12), (6, 39)]
            .into_iter()
            .map(PointRecord::from)
            .collect();
        assert_eq!(decoded.points, expected);
        assert_eq!((decoded.n, decoded.k), (4, 3));
    }

    #[test]
    fn decode_value_handles_letters_in_either_case() {
        assert_eq!(decode_value("ff", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(decode_value("FF", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(decode_value("zz", 36).unwrap(), BigUint::from(1295u32));
        assert_eq!(decode_value("0", 2).unwrap(), BigUint::zero());
    }

    #[test]
    fn decode_value_does_not_overflow() {
        let value = "1".repeat(200);
        let decoded = decode_value(&value, 2).unwrap();
        assert_eq!(decoded, (BigUint::from(1u8) << 200u32) - 1u32);
    }

    #[test]
    fn invalid_digit_reports_position() {
        assert_eq!(
            decode_value("1021", 2),
            Err(MalformedInput::InvalidDigit {
                digit: '2',
                position: 2,
                base: 2
            })
        );
        assert!(decode_value("-5", 10).is_err());
        assert!(decode_value("1_000", 10).is_err());
        assert!(decode_value(" 7", 10).is_err());
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_eq!(decode_value("", 10), Err(MalformedInput::EmptyValue));
    }

    #[test]
    fn unsupported_bases_are_rejected() {
        assert_eq!(
            decode_value("1", 1),
            Err(MalformedInput::UnsupportedBase(1))
        );
        assert_eq!(
            decode_value("1", 37),
            Err(MalformedInput::UnsupportedBase(37))
        );
        let err = decode_points(&doc(1, &[("1", 40, "1")])).unwrap_err();
        assert_eq!(err, MalformedInput::UnsupportedBase(40));
    }

    #[test]
    fn non_integer_keys_are_rejected() {
        for key in ["x", "1.5", "", "0x10"] {
            let err = decode_points(&doc(1, &[(key, 10, "1")])).unwrap_err();
            assert_eq!(err, MalformedInput::InvalidKey(key.to_owned()));
        }
    }

    #[test]
    fn keys_follow_rust_integer_grammar() {
        assert_eq!(parse_x("-3"), Ok(-3));
        assert_eq!(parse_x("+3"), Ok(3));
        assert_eq!(parse_x("007"), Ok(7));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert_eq!(
            decode_points(&doc(0, &[("1", 10, "1")])).unwrap_err(),
            MalformedInput::ZeroThreshold
        );
    }

    #[test]
    fn later_entries_are_validated_too() {
        let err = decode_points(&doc(1, &[("1", 10, "1"), ("2", 10, "1a")]))
            .unwrap_err();
        assert!(matches!(err, MalformedInput::InvalidDigit { digit: 'a', .. }));
    }

    #[quickcheck]
    fn agrees_with_from_str_radix(raw: Vec<u8>, base: u8) -> TestResult {
        let base = u32::from(base % 35) + 2;
        let text: String = raw
            .into_iter()
            .take(10)
            .map(|b| DIGITS[usize::from(b) % DIGITS.len()] as char)
            .collect();

        match (decode_value(&text, base), u64::from_str_radix(&text, base)) {
            (Ok(ours), Ok(std)) => {
                TestResult::from_bool(ours == BigUint::from(std))
            }
            (Err(_), Err(_)) => TestResult::passed(),
            _ => TestResult::failed(),
        }
    }
}
