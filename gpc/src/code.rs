//! Base-27 transcoding and the `GridPointCode` value type.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{ALPHABET, BASE, ELEVEN, GPC_LENGTH},
    coord::{Coordinates, DecomposedAxis},
    errors::GpcError,
    point::Point,
    utils::div_mod,
};

lazy_static! {
    /// Everything a formatted code may carry besides its 11 symbols.
    static ref SEPARATORS: Regex =
        Regex::new(r"[#\-\s]+").expect("separator pattern is valid");
}

/// Strip formatting and normalize the case before any validation.
fn clean(code: &str) -> String {
    SEPARATORS.replace_all(&code.to_uppercase(), "").into_owned()
}

/// Render a non-negative integer over the 27-symbol alphabet,
/// most significant symbol first. Zero renders as the empty string;
/// the caller's offset guarantees a fixed-length result.
fn to_base27(mut value: u64) -> String {
    let mut encoded = String::new();
    while value > 0 {
        let (rest, digit) = div_mod(value, BASE);
        let symbol = ALPHABET.as_bytes()[digit as usize];
        encoded.insert(0, char::from(symbol));
        value = rest;
    }
    encoded
}

/// The exact inverse of [`to_base27`], left to right.
///
/// # Errors
/// [`GpcError::GpcChar`] on any symbol outside the alphabet.
fn from_base27(code: &str) -> Result<u64, GpcError> {
    code.chars().try_fold(0_u64, |acc, ch| {
        let digit = ALPHABET.find(ch).ok_or(GpcError::GpcChar)?;
        Ok(acc * BASE + digit as u64)
    })
}

/// `XXXXXXXXXXX` -> `#XXXX-XXXX-XXX`
fn format_code(code: &str) -> String {
    format!("#{}-{}-{}", &code[..4], &code[4..8], &code[8..GPC_LENGTH])
}

/// An 11-character Grid Point Code: a whole coordinate pair,
/// down to five fractional degree digits, as one typeable token.
///
/// [`Display`][fmt::Display] renders the bare 11 symbols; the alternate
/// form (`{:#}`) renders the `#XXXX-XXXX-XXX` presentation.
/// [`FromStr`] accepts either, in any case, with stray whitespace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPointCode {
    point: Point,
}

impl GridPointCode {
    /// Encode a validated coordinate pair. Never fails:
    /// every in-range coordinate packs into a representable point.
    pub fn from_coordinates(coordinates: Coordinates) -> Self {
        let latitude = DecomposedAxis::decompose(coordinates.latitude());
        let longitude = DecomposedAxis::decompose(coordinates.longitude());

        Self {
            point: Point::pack(latitude, longitude),
        }
    }

    /// The coordinate pair this code addresses,
    /// truncated to five fractional digits per axis.
    pub fn coordinates(self) -> Coordinates {
        let (latitude, longitude) = self.point.unpack();
        Coordinates::from_decomposed(latitude, longitude)
    }
}

impl FromStr for GridPointCode {
    type Err = GpcError;

    /// Clean, then validate: emptiness, length, alphabet and
    /// the decoded range, failing on the first violated rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = clean(s);
        if clean.is_empty() {
            return Err(GpcError::GpcNull);
        }
        if clean.chars().count() != GPC_LENGTH {
            return Err(GpcError::GpcLength);
        }

        let transcoded = from_base27(&clean)?;
        let units = transcoded.checked_sub(ELEVEN).ok_or(GpcError::GpcRange)?;
        let point = Point::with_units(units)?;

        Ok(Self { point })
    }
}

impl fmt::Display for GridPointCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = to_base27(self.point.units() + ELEVEN);
        debug_assert_eq!(code.len(), GPC_LENGTH);

        if f.alternate() {
            write!(f, "{}", format_code(&code))
        } else {
            write!(f, "{}", code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_shape() {
        assert_eq!(ALPHABET.len(), 27);
        // the order defines the integer mapping, so it is pinned here
        assert_eq!(&ALPHABET[..4], "CDFG");
        assert_eq!(&ALPHABET[17..], "0123456789");
        for ambiguous in "ABEIOQSUZ".chars() {
            assert!(!ALPHABET.contains(ambiguous));
        }
    }

    #[test]
    fn zero_renders_empty() {
        assert_eq!(to_base27(0), "");
    }

    #[test]
    fn single_symbols() {
        assert_eq!(to_base27(1), "D");
        assert_eq!(to_base27(11), "R");
        assert_eq!(to_base27(26), "9");
        assert_eq!(to_base27(27), "DC");
    }

    #[test]
    fn offset_origin_renders_eleven_symbols() {
        assert_eq!(to_base27(ELEVEN + 10_000_000_000), "DCCCCCCCCCC");
    }

    #[test]
    fn transcoding_round_trip() {
        for value in [1, 26, 27, ELEVEN, ELEVEN + 10_000_000_000, 27_u64.pow(11) - 1] {
            assert_eq!(from_base27(&to_base27(value)).unwrap(), value);
        }
    }

    #[test]
    fn excluded_letters_fail_transcoding() {
        assert_eq!(from_base27("DCCA"), Err(GpcError::GpcChar));
        assert_eq!(from_base27("é"), Err(GpcError::GpcChar));
    }

    #[test]
    fn formatting_splits_4_4_3() {
        assert_eq!(format_code("DCCCCCCCCCC"), "#DCCC-CCCC-CCC");
        assert_eq!(format_code("HG9PJLHJX69"), "#HG9P-JLHJ-X69");
    }

    #[test]
    fn cleaning_strips_separators_and_uppercases() {
        assert_eq!(clean("#HG9P-JLHJ-X69"), "HG9PJLHJX69");
        assert_eq!(clean("  hg9p jlhj x69\t"), "HG9PJLHJX69");
        assert_eq!(clean("#--- \n"), "");
    }

    #[test]
    fn parse_accepts_both_presentations() {
        let formatted: GridPointCode = "#HG9P-JLHJ-X69".parse().unwrap();
        let bare: GridPointCode = "hg9pjlhjx69".parse().unwrap();
        assert_eq!(formatted, bare);

        assert_eq!(format!("{}", formatted), "HG9PJLHJX69");
        assert_eq!(format!("{:#}", formatted), "#HG9P-JLHJ-X69");
    }

    #[test]
    fn parse_rejects_emptiness() {
        assert_eq!("".parse::<GridPointCode>(), Err(GpcError::GpcNull));
        assert_eq!("    ".parse::<GridPointCode>(), Err(GpcError::GpcNull));
        assert_eq!("#--".parse::<GridPointCode>(), Err(GpcError::GpcNull));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "#HG9P-JLHJ-X696".parse::<GridPointCode>(),
            Err(GpcError::GpcLength)
        );
        assert_eq!(
            "#HG9P-JLHJ-X6".parse::<GridPointCode>(),
            Err(GpcError::GpcLength)
        );
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        assert_eq!(
            "#HG9P-JLHJ-A69".parse::<GridPointCode>(),
            Err(GpcError::GpcChar)
        );
        assert_eq!(
            "#HG9P-JLHJ-E69".parse::<GridPointCode>(),
            Err(GpcError::GpcChar)
        );
    }

    #[test]
    fn parse_rejects_codes_beyond_the_coordinate_domain() {
        assert_eq!(
            "#HG9P-JLHJ-X7C".parse::<GridPointCode>(),
            Err(GpcError::GpcRange)
        );
        assert_eq!(
            "#JG9P-JLHJ-X7C".parse::<GridPointCode>(),
            Err(GpcError::GpcRange)
        );
        // transcodes below the offset
        assert_eq!(
            "CCCCCCCCCCC".parse::<GridPointCode>(),
            Err(GpcError::GpcRange)
        );
    }

    #[test]
    fn code_round_trip_through_coordinates() {
        let code: GridPointCode = "#FYGC-MF89-XH2".parse().unwrap();
        let spot = code.coordinates();
        assert_eq!(spot.latitude(), -12.123_45);
        assert_eq!(spot.longitude(), -123.123_45);
        assert_eq!(GridPointCode::from_coordinates(spot), code);
    }
}
