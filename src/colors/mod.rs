//! This module contains the color representations besides RGB. [`HSVColor`] and [`HexColor`] can be
//! converted back to RGB, so they implement [`Color`]; the rest are results of conversions out of
//! RGB. For convenience, each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cielabcolor;
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hexcolor::{HexColor, HexParseError};
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::xyzcolor::XYZColor;
