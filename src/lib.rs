//! clr converts single color values between RGB, HSL, HSV, CMYK, hex codes, CIE XYZ, and CIELAB, and
//! names colors by finding the perceptually closest entry in a table of named colors.
//!
//! RGB is the hub: [`RGBColor`](color/struct.RGBColor.html) hosts every formula, and the other
//! stored representations ([`HSVColor`](colors/hsvcolor/struct.HSVColor.html) and
//! [`HexColor`](colors/hexcolor/struct.HexColor.html)) reach them by converting to RGB first. The
//! [`Color`](color/trait.Color.html) trait ties them together, so distance and naming work on any of
//! them. Everything here is a pure function of plain values: there is no global state, and name
//! tables are always passed in by the caller.
//!
//! # Example
//! ```
//! # use clr::prelude::*;
//! # use clr::colors::HexColor;
//! # use clr::names::{NameTable, NamedColor};
//! let table: NameTable = vec![
//!     NamedColor::new("FF0000", "red"),
//!     NamedColor::new("0000FF", "blue"),
//! ].into_iter().collect();
//! let color = HexColor::new("1F2AE0");
//! assert_eq!(color.to_rgb8().unwrap(), (31, 42, 224));
//! assert_eq!(color.name_in(&table).unwrap(), "blue");
//! ```

#![doc(html_root_url = "https://docs.rs/clr/0.3.0")]
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but the matrix coefficients are copied from the standard as is
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate num;
extern crate regex;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate float_cmp;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod html_colors;
pub mod names;
pub mod numeric;
pub mod prelude;
