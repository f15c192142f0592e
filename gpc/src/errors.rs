use std::{error::Error, fmt};

/// Every way an encode or decode operation can fail.
///
/// The coordinate variants reject out-of-range input on encoding,
/// the `Gpc*` variants reject a malformed code on decoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GpcError {
    /// Latitude outside the open range (-90, 90).
    Latitude,
    /// Longitude outside the open range (-180, 180).
    Longitude,
    /// The code is empty (or contains separators only).
    GpcNull,
    /// The cleaned code is not exactly 11 characters long.
    GpcLength,
    /// The code contains a character outside the 27-symbol alphabet.
    GpcChar,
    /// The code does not transcode back into a representable point.
    GpcRange,
}

impl GpcError {
    /// The bare failure tag, as reported by the validation probes.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Latitude => "LATITUDE",
            Self::Longitude => "LONGITUDE",
            Self::GpcNull => "GPC_NULL",
            Self::GpcLength => "GPC_LENGTH",
            Self::GpcChar => "GPC_CHAR",
            Self::GpcRange => "GPC_RANGE",
        }
    }

    fn is_coordinate(self) -> bool {
        matches!(self, Self::Latitude | Self::Longitude)
    }
}

impl fmt::Display for GpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_coordinate() {
            write!(f, "{}: value out of valid range.", self.reason())
        } else {
            write!(f, "{}: Invalid GPC.", self.reason())
        }
    }
}

impl Error for GpcError {}
