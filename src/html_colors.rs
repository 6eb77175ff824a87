//! This file provides a built-in [`NameTable`] of the 16 basic color keywords from HTML 4, for
//! callers who want rough color names without supplying a table of their own.

use names::{NameTable, NamedColor};

// in the order HTML 4 lists them
const BASIC_COLOR_CODES: [(&str, &str); 16] = [
    ("000000", "black"),
    ("C0C0C0", "silver"),
    ("808080", "gray"),
    ("FFFFFF", "white"),
    ("800000", "maroon"),
    ("FF0000", "red"),
    ("800080", "purple"),
    ("FF00FF", "fuchsia"),
    ("008000", "green"),
    ("00FF00", "lime"),
    ("808000", "olive"),
    ("FFFF00", "yellow"),
    ("000080", "navy"),
    ("0000FF", "blue"),
    ("008080", "teal"),
    ("00FFFF", "aqua"),
];

lazy_static! {
    /// The basic HTML color keywords as a table, in specification order.
    /// # Example
    /// ```
    /// # use clr::prelude::*;
    /// # use clr::html_colors::BASIC_COLORS;
    /// assert_eq!(BASIC_COLORS.len(), 16);
    /// assert_eq!(RGBColor::new(120, 120, 10).name_in(&*BASIC_COLORS).unwrap(), "olive");
    /// ```
    pub static ref BASIC_COLORS: NameTable = BASIC_COLOR_CODES
        .iter()
        .map(|&(hex, name)| NamedColor::new(hex, name))
        .collect();
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::{Color, RGBColor};
    use names::ColorTable;

    #[test]
    fn test_codes_are_valid() {
        assert!(BASIC_COLORS.iter().all(|entry| entry.hex.valid()));
        assert_eq!(BASIC_COLORS.lookup("00ffff"), Some("aqua"));
    }

    #[test]
    fn test_basic_names() {
        let expected = btreemap! {
            "black" => RGBColor::new(10, 5, 0),
            "silver" => RGBColor::new(190, 195, 190),
            "maroon" => RGBColor::new(120, 5, 10),
            "teal" => RGBColor::new(0, 130, 125),
            "yellow" => RGBColor::new(250, 245, 20),
            "fuchsia" => RGBColor::new(255, 0, 255),
        };
        for (name, color) in expected {
            assert_eq!(color.basic_name(), name, "naming {:?}", color);
        }
    }
}
