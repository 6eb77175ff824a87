//! Hex codes as a color representation of their own. A [`HexColor`] stores the code as given and
//! parses it on every conversion, so a malformed code is only reported when it's used.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use color::{Color, ColorError, RGBColor};

lazy_static! {
    // six hex digits at the start; anything after them is ignored
    static ref HEX_PREFIX: Regex = Regex::new(r"^[0-9A-Fa-f]{6}").unwrap();
}

/// An error in parsing a hex code.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum HexParseError {
    /// The code has fewer than six characters.
    TooShort,
    /// One of the first six characters is not a hexadecimal digit.
    InvalidDigit,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexParseError::TooShort => write!(f, "hex code is shorter than six digits"),
            HexParseError::InvalidDigit => write!(f, "hex code contains a non-hexadecimal digit"),
        }
    }
}

impl Error for HexParseError {}

/// A color given as a hex code of the form `RRGGBB`, without a leading `#`. Either case is accepted.
/// # Example
/// ```
/// # use clr::prelude::*;
/// # use clr::colors::{HexColor, HexParseError};
/// let slate = HexColor::new("4B5C70");
/// assert_eq!(slate.parse(), Ok(RGBColor::new(75, 92, 112)));
/// assert_eq!(HexColor::new("4B5C7").parse(), Err(HexParseError::TooShort));
/// assert!(!HexColor::new("4B5G70").valid());
/// // the FromStr impl strips a leading # and checks the code up front
/// let parsed: HexColor = "#4b5c70".parse().unwrap();
/// assert_eq!(parsed.to_hex().unwrap(), "4B5C70");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexColor {
    code: String,
}

impl HexColor {
    /// Stores a code without checking it.
    pub fn new<S: Into<String>>(code: S) -> HexColor {
        HexColor { code: code.into() }
    }

    /// The code as it was given.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Parses the first six characters into RGB, two digits per channel.
    /// # Errors
    /// [`HexParseError::TooShort`] for fewer than six characters and
    /// [`HexParseError::InvalidDigit`] for anything that isn't a hex digit among the first six.
    pub fn parse(&self) -> Result<RGBColor, HexParseError> {
        if self.code.chars().count() < 6 {
            return Err(HexParseError::TooShort);
        }
        if !HEX_PREFIX.is_match(&self.code) {
            return Err(HexParseError::InvalidDigit);
        }
        // the first six bytes are now ASCII digits, so slicing is on char boundaries
        let channel = |start: usize| {
            u8::from_str_radix(&self.code[start..start + 2], 16)
                .map_err(|_| HexParseError::InvalidDigit)
        };
        Ok(RGBColor::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Color for HexColor {
    fn valid(&self) -> bool {
        self.parse().is_ok()
    }
    fn to_rgb(&self) -> Result<RGBColor, ColorError> {
        Ok(self.parse()?)
    }
}

impl FromStr for HexColor {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<HexColor, HexParseError> {
        let code = if s.starts_with('#') { &s[1..] } else { s };
        let hex = HexColor::new(code);
        hex.parse()?;
        Ok(hex)
    }
}

/// Displays the code exactly as stored.
impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(HexColor::new("4B5C70").parse(), Ok(RGBColor::new(75, 92, 112)));
        assert_eq!(HexColor::new("ff00aa").parse(), Ok(RGBColor::new(255, 0, 170)));
        // extra characters after the sixth are ignored
        assert_eq!(HexColor::new("000000FF").parse(), Ok(RGBColor::new(0, 0, 0)));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(HexColor::new("").parse(), Err(HexParseError::TooShort));
        assert_eq!(HexColor::new("12345").parse(), Err(HexParseError::TooShort));
        assert_eq!(HexColor::new("#12345").parse(), Err(HexParseError::InvalidDigit));
        assert_eq!(HexColor::new("+12345").parse(), Err(HexParseError::InvalidDigit));
        assert_eq!(HexColor::new("12 456").parse(), Err(HexParseError::InvalidDigit));
        // multibyte characters must not panic
        assert_eq!(HexColor::new("ééé").parse(), Err(HexParseError::TooShort));
        assert_eq!(HexColor::new("éééééé").parse(), Err(HexParseError::InvalidDigit));
    }

    #[test]
    fn test_conversions_fail_on_bad_hex() {
        let bad = HexColor::new("XYZXYZ");
        assert!(!bad.valid());
        let err = ColorError::InvalidHex(HexParseError::InvalidDigit);
        assert_eq!(bad.to_rgb(), Err(err));
        assert_eq!(bad.to_hsl(), Err(err));
        assert_eq!(bad.to_hex(), Err(err));
        assert!(bad.to_cielab().is_err());
        assert!(bad.distance(&RGBColor::new(0, 0, 0)).is_err());
        assert!(RGBColor::new(0, 0, 0).distance(&bad).is_err());
    }

    #[test]
    fn test_from_str() {
        let hex: HexColor = "#4B5C70".parse().unwrap();
        assert_eq!(hex.code(), "4B5C70");
        assert_eq!(hex.to_string(), "4B5C70");
        assert_eq!("4b5c70".parse::<HexColor>().map(|h| h.to_rgb8()), Ok(Ok((75, 92, 112))));
        assert_eq!("#4B5C".parse::<HexColor>(), Err(HexParseError::TooShort));
        assert_eq!("##4B5C70".parse::<HexColor>(), Err(HexParseError::InvalidDigit));
    }

    #[test]
    fn test_to_hex_normalizes_case() {
        assert_eq!(HexColor::new("abcdef").to_hex(), Ok("ABCDEF".to_string()));
    }
}
