//! This file defines the [`Color`] trait, the error type its conversions return, and [`RGBColor`],
//! the hub every other representation converts through. Most of the interesting math lives here:
//! RGB hosts the HSL, HSV, CMYK, XYZ, and CIELAB formulas, and every other color type reaches them
//! by converting to RGB first.
//!
//! A note on precision: every conversion that ends in an integer representation (HSL, HSV, CMYK,
//! and RGB itself when coming from HSV) *truncates* toward zero instead of rounding. This is kept
//! on purpose so results are reproducible against existing fixtures, even though rounding would be
//! a little more faithful.

use std::error::Error;
use std::fmt;

use colors::{CIELABColor, CMYKColor, HSLColor, HSVColor, HexColor, HexParseError, XYZColor};
use consts::{CIELAB_REFERENCE_WHITE, CIE_EPSILON, CIE_KAPPA_SLOPE, SRGB_GAMMA_CUTOFF, SRGB_TO_XYZ};
use html_colors::BASIC_COLORS;
use names::{nearest_name, ColorTable};
use numeric;
use rulinalg::vector::Vector;

/// An error from a [`Color`] operation. Only colors that need parsing can fail to convert, but every
/// color shares the same interface, so every conversion returns a `Result`.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorError {
    /// The color is a hex code that could not be parsed.
    InvalidHex(HexParseError),
    /// A name was requested from a table with no entries.
    NoMatch,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidHex(ref e) => write!(f, "invalid hex color: {}", e),
            ColorError::NoMatch => write!(f, "no named color to match against"),
        }
    }
}

impl Error for ColorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ColorError::InvalidHex(ref e) => Some(e),
            ColorError::NoMatch => None,
        }
    }
}

impl From<HexParseError> for ColorError {
    fn from(err: HexParseError) -> ColorError {
        ColorError::InvalidHex(err)
    }
}

/// A trait for every stored color representation: anything that can produce an [`RGBColor`] gets
/// every other conversion, naming, and perceptual distance for free. Implementors only need to say
/// whether they are in range and how to get to RGB.
///
/// Validity is advisory: conversions never check it, so an out-of-range color converts to an
/// out-of-range (or saturated) result instead of failing.
/// # Example
/// Distance works between different representations, because everything goes through CIELAB.
///
/// ```
/// # use clr::prelude::*;
/// # use clr::colors::{HSVColor, HexColor};
/// let hex = HexColor::new("4B5C70");
/// let rgb = RGBColor::new(75, 92, 112);
/// assert_eq!(hex.to_rgb().unwrap(), rgb);
/// assert_eq!(hex.distance(&rgb).unwrap(), 0.);
/// let hsv = HSVColor::new(13, 81, 47);
/// assert!(hsv.distance(&rgb).unwrap() > 10.);
/// ```
pub trait Color {
    /// Whether every component is within the bounds of its color space.
    fn valid(&self) -> bool;
    /// Converts to the canonical RGB representation. Every other conversion is built on this.
    fn to_rgb(&self) -> Result<RGBColor, ColorError>;

    /// The three RGB channels as a tuple.
    fn to_rgb8(&self) -> Result<(u8, u8, u8), ColorError> {
        let rgb = self.to_rgb()?;
        Ok((rgb.r, rgb.g, rgb.b))
    }
    /// The channels widened to 16 bits with an opaque alpha. See [`RGBColor::rgba`].
    fn to_rgba(&self) -> Result<(u32, u32, u32, u32), ColorError> {
        Ok(self.to_rgb()?.rgba())
    }
    /// Converts to HSL through RGB.
    fn to_hsl(&self) -> Result<HSLColor, ColorError> {
        Ok(self.to_rgb()?.hsl())
    }
    /// Converts to HSV through RGB.
    fn to_hsv(&self) -> Result<HSVColor, ColorError> {
        Ok(self.to_rgb()?.hsv())
    }
    /// Converts to CMYK through RGB.
    fn to_cmyk(&self) -> Result<CMYKColor, ColorError> {
        Ok(self.to_rgb()?.cmyk())
    }
    /// Converts to CIE 1931 XYZ through RGB.
    fn to_xyz(&self) -> Result<XYZColor, ColorError> {
        Ok(self.to_rgb()?.xyz())
    }
    /// Converts to CIELAB through RGB.
    fn to_cielab(&self) -> Result<CIELABColor, ColorError> {
        Ok(self.to_rgb()?.cielab())
    }
    /// The uppercase `RRGGBB` hex code, without a leading `#`.
    fn to_hex(&self) -> Result<String, ColorError> {
        Ok(self.to_rgb()?.hex())
    }
    /// Finds the name of the closest color in `table`. See [`RGBColor::name_in`].
    fn name_in<T: ColorTable + ?Sized>(&self, table: &T) -> Result<String, ColorError> {
        self.to_rgb()?.name_in(table)
    }
    /// The perceptual distance between two colors: the Euclidean distance between their CIELAB
    /// coordinates.
    fn distance<C: Color + ?Sized>(&self, other: &C) -> Result<f64, ColorError> {
        Ok(self.to_cielab()?.distance(&other.to_cielab()?))
    }
}

/// A color in the sRGB color space, with each channel stored as an integer from 0 to 255.
/// # Example
/// ```
/// # use clr::prelude::*;
/// let slate = RGBColor::new(78, 91, 112);
/// let hsl = slate.hsl();
/// assert_eq!((hsl.h, hsl.s, hsl.l), (217, 17, 37));
/// assert_eq!(slate.hex(), "4E5B70");
/// assert_eq!(RGBColor::new(0, 0, 0).rgba(), (0, 0, 0, 65535));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Makes a new color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }

    // channels scaled to 0-1
    fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Widens each channel to 16 bits by copying it into both bytes, so 0xAB becomes 0xABAB, and
    /// adds a fully opaque alpha. This matches APIs that use 16 bits per channel held in `u32`s.
    pub fn rgba(&self) -> (u32, u32, u32, u32) {
        let widen = |c: u8| {
            let c = u32::from(c);
            c | c << 8
        };
        (widen(self.r), widen(self.g), widen(self.b), widen(255))
    }

    /// Converts to HSL, truncating each component to an integer: hue in degrees from 0 to 360, and
    /// saturation and lightness as percentages.
    pub fn hsl(&self) -> HSLColor {
        let [r, g, b] = self.normalized();
        let max_c = numeric::max(&[r, g, b]);
        let min_c = numeric::min(&[r, g, b]);
        let chroma = max_c - min_c;

        let lightness = (max_c + min_c) / 2.0;
        let (hue, saturation) = if chroma == 0.0 {
            // gray: hue is undefined, call it 0
            (0.0, 0.0)
        } else if lightness > 0.5 {
            (hue_fraction(r, g, b, max_c, chroma), chroma / (2.0 - max_c - min_c))
        } else {
            (hue_fraction(r, g, b, max_c, chroma), chroma / (max_c + min_c))
        };

        HSLColor {
            h: (hue * 360.0) as u16,
            s: (saturation * 100.0) as u8,
            l: (lightness * 100.0) as u8,
        }
    }

    /// Converts to HSV, truncating each component to an integer: hue in degrees from 0 to 360, and
    /// saturation and value as percentages.
    pub fn hsv(&self) -> HSVColor {
        let [r, g, b] = self.normalized();
        let max_c = numeric::max(&[r, g, b]);
        let min_c = numeric::min(&[r, g, b]);
        let chroma = max_c - min_c;

        let (hue, saturation) = if chroma == 0.0 {
            (0.0, 0.0)
        } else {
            (hue_fraction(r, g, b, max_c, chroma), chroma / max_c)
        };

        HSVColor {
            h: (hue * 360.0) as u16,
            s: (saturation * 100.0) as u8,
            v: (max_c * 100.0) as u8,
        }
    }

    /// Converts to CMYK percentages. Pure black has no defined cyan, magenta, or yellow, so those
    /// are 0 and key is 100.
    pub fn cmyk(&self) -> CMYKColor {
        let [r, g, b] = self.normalized();
        let k = 1.0 - numeric::max(&[r, g, b]);
        if k == 1.0 {
            return CMYKColor { c: 0, m: 0, y: 0, k: 100 };
        }
        let ink = |channel: f64| (((1.0 - channel - k) / (1.0 - k)) * 100.0) as u8;
        CMYKColor {
            c: ink(r),
            m: ink(g),
            y: ink(b),
            k: (k * 100.0) as u8,
        }
    }

    /// The hex code of this color: two uppercase, zero-padded digits per channel in the order red,
    /// green, blue, with no leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to CIE 1931 XYZ (D65), scaled so that Y ranges from 0 to 100.
    pub fn xyz(&self) -> XYZColor {
        // undo the sRGB transfer function
        let linearize = |c: f64| {
            if c > SRGB_GAMMA_CUTOFF {
                ((c + 0.055) / 1.055).powf(2.4)
            } else {
                c / 12.92
            }
        };
        let [r, g, b] = self.normalized();
        let linear = Vector::new(vec![
            linearize(r) * 100.0,
            linearize(g) * 100.0,
            linearize(b) * 100.0,
        ]);
        let xyz = &*SRGB_TO_XYZ * &linear;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Converts to CIELAB, via XYZ, against the reference white in
    /// [`consts`](../consts/index.html).
    pub fn cielab(&self) -> CIELABColor {
        let xyz = self.xyz();
        // compress each axis the way human vision does
        let f = |t: f64| {
            if t > CIE_EPSILON {
                t.powf(1.0 / 3.0)
            } else {
                CIE_KAPPA_SLOPE * t + 16.0 / 116.0
            }
        };
        let fx = f(xyz.x / CIELAB_REFERENCE_WHITE[0]);
        let fy = f(xyz.y / CIELAB_REFERENCE_WHITE[1]);
        let fz = f(xyz.z / CIELAB_REFERENCE_WHITE[2]);

        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// The perceptual distance to another RGB color, as the Euclidean distance in CIELAB.
    pub fn distance_to(&self, other: &RGBColor) -> f64 {
        self.cielab().distance(&other.cielab())
    }

    /// Names this color using `table`. An entry with exactly this hex code wins outright, even if
    /// another entry is listed first; otherwise the perceptually closest entry wins, with ties going
    /// to the earliest one.
    /// # Errors
    /// [`ColorError::NoMatch`] if the table is empty, and [`ColorError::InvalidHex`] if an entry
    /// scanned before a match has a malformed hex code.
    pub fn name_in<T: ColorTable + ?Sized>(&self, table: &T) -> Result<String, ColorError> {
        nearest_name(self, table)
    }

    /// Names this color using the 16 basic HTML color keywords.
    /// # Example
    /// ```
    /// # use clr::prelude::*;
    /// assert_eq!(RGBColor::new(250, 10, 10).basic_name(), "red");
    /// assert_eq!(RGBColor::new(0, 0, 128).basic_name(), "navy");
    /// ```
    pub fn basic_name(&self) -> String {
        match nearest_name(self, &*BASIC_COLORS) {
            Ok(name) => name,
            // the built-in table is non-empty and every code in it is valid
            Err(e) => unreachable!("built-in basic color table is broken: {}", e),
        }
    }
}

/// Which sixth of the hue circle a color is in, as a fraction of a full turn. `max_c` must be one of
/// `r`, `g`, or `b`, and `chroma` must be nonzero. Ties for the largest channel go to red, then
/// green.
fn hue_fraction(r: f64, g: f64, b: f64, max_c: f64, chroma: f64) -> f64 {
    let sector = if max_c == r {
        if g < b {
            (g - b) / chroma + 6.0
        } else {
            (g - b) / chroma
        }
    } else if max_c == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    sector / 6.0
}

impl Color for RGBColor {
    /// Always true: every `u8` is a valid channel.
    fn valid(&self) -> bool {
        true
    }
    fn to_rgb(&self) -> Result<RGBColor, ColorError> {
        Ok(*self)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(channels: (u8, u8, u8)) -> RGBColor {
        RGBColor::new(channels.0, channels.1, channels.2)
    }
}

impl From<RGBColor> for HexColor {
    fn from(rgb: RGBColor) -> HexColor {
        HexColor::new(rgb.hex())
    }
}

/// Displays as the hex code, e.g. `4E5B70`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}
