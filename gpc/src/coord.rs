//! Coordinate validation and the decimal decomposition feeding the packer.

use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        AXIS_UNITS, FRACTION_DIGITS, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
    },
    errors::GpcError,
};

/// A geographic position in decimal degrees.
///
/// Both axes are validated on construction against their *open* ranges:
/// the poles (±90) and the antimeridian (±180) are not representable.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Construct a validated coordinate pair.
    ///
    /// # Errors
    /// [`GpcError::Latitude`] when `latitude <= -90` or `>= 90`
    /// (checked first), [`GpcError::Longitude`] when
    /// `longitude <= -180` or `>= 180`. A NaN axis fails the same way.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GpcError> {
        if !(latitude > MIN_LATITUDE && latitude < MAX_LATITUDE) {
            return Err(GpcError::Latitude);
        }
        if !(longitude > MIN_LONGITUDE && longitude < MAX_LONGITUDE) {
            return Err(GpcError::Longitude);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Only for values reconstructed from a decoded point,
    /// which are in range by construction.
    pub(crate) fn from_decomposed(latitude: DecomposedAxis, longitude: DecomposedAxis) -> Self {
        Self {
            latitude: latitude.recompose(),
            longitude: longitude.recompose(),
        }
    }

    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees, negative west of the prime meridian.
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

impl TryFrom<(f64, f64)> for Coordinates {
    type Error = GpcError;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (latitude, longitude) = value;
        Self::new(latitude, longitude)
    }
}

/// The side of the axis origin a value lies on
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn is_negative(self) -> bool {
        self == Self::Negative
    }

    fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// One axis split into sign, whole degrees and the first five
/// fractional digits (in order of decreasing significance).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct DecomposedAxis {
    pub(crate) sign: Sign,
    pub(crate) degrees: u16,
    pub(crate) fraction: [u8; FRACTION_DIGITS],
}

impl DecomposedAxis {
    /// Split a degree value on its printed decimal form.
    ///
    /// The value is first formatted with exactly ten fractional digits
    /// (a stable, representation-drift-free rendering of the double),
    /// then the fraction is *truncated* to five digits. Everything past
    /// the fifth digit is discarded, never rounded away.
    pub(crate) fn decompose(value: f64) -> Self {
        let text = format!("{:.10}", value);

        // `-0.0` keeps its sign here, as the string carries the minus
        let sign = if text.starts_with('-') {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let text = text.trim_start_matches(['-', '+']);

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (text, ""),
        };
        let degrees = integer
            .parse()
            .expect("fixed-precision formatting yields a plain integer part");

        let mut digits = [0_u8; FRACTION_DIGITS];
        for (slot, ch) in digits.iter_mut().zip(fraction.chars()) {
            let digit = ch
                .to_digit(10)
                .expect("fixed-precision formatting yields a decimal fraction");
            *slot = digit as u8;
        }

        Self {
            sign,
            degrees,
            fraction: digits,
        }
    }

    /// Rebuild an axis from its sign-folded degrees and fractional digits.
    pub(crate) fn from_folded(folded: u16, fraction: [u8; FRACTION_DIGITS]) -> Self {
        let sign = if folded % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };

        Self {
            sign,
            degrees: folded / 2,
            fraction,
        }
    }

    /// Whole degrees with the sign folded into the lowest bit,
    /// so the packer only ever sees non-negative values.
    pub(crate) fn folded(&self) -> u16 {
        self.degrees * 2 + u16::from(self.sign.is_negative())
    }

    /// The degree value this axis decomposes; exact for 5-digit inputs.
    pub(crate) fn recompose(&self) -> f64 {
        let mut units = u32::from(self.degrees);
        for digit in self.fraction {
            units = units * 10 + u32::from(digit);
        }

        self.sign.factor() * f64::from(units) / f64::from(AXIS_UNITS)
    }
}
