//! This module names colors: given a table of named hex codes, it finds the entry that looks closest
//! to a color. Tables are supplied by the caller through the [`ColorTable`] trait and are only ever
//! read, so one table can serve any number of lookups, from any number of threads. [`NameTable`] is
//! a ready-made table that can be built in code or loaded from CSV.
//!
//! Matching is a single linear scan with no caching. An entry whose hex code is exactly the color's
//! wins immediately; otherwise the entry at the smallest CIELAB distance wins, and among entries at
//! the same distance the first one scanned wins.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::iter::FromIterator;
use std::path::Path;

use csv;

use color::{Color, ColorError, RGBColor};
use colors::{HexColor, HexParseError};

/// A source of named colors. Implementors decide the iteration order, and naming respects it.
pub trait ColorTable {
    /// Every entry, in the order naming should consider them.
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a NamedColor> + 'a>;
    /// The name for a hex code, if the table has one. Naming only ever asks about codes that come
    /// from [`entries`](#tymethod.entries).
    fn lookup(&self, hex: &str) -> Option<&str>;
}

/// A hex code with a name attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// The color.
    pub hex: HexColor,
    /// What it's called.
    pub name: String,
}

impl NamedColor {
    /// Makes an entry. The code is stored as is, without a leading `#`.
    pub fn new<S: Into<String>, T: Into<String>>(hex: S, name: T) -> NamedColor {
        NamedColor {
            hex: HexColor::new(hex),
            name: name.into(),
        }
    }
}

/// Looks entries up by scanning, so a plain slice or `Vec` works as a table.
impl ColorTable for [NamedColor] {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a NamedColor> + 'a> {
        Box::new(self.iter())
    }
    fn lookup(&self, hex: &str) -> Option<&str> {
        self.iter()
            .find(|entry| entry.hex.code().eq_ignore_ascii_case(hex))
            .map(|entry| entry.name.as_str())
    }
}

/// An ordered table of named colors with an index for lookups. Duplicate codes are allowed: every
/// entry takes part in naming, but [`lookup`](trait.ColorTable.html#tymethod.lookup) gives the name of
/// the first entry with a given code. Codes are compared without regard to case.
/// # Example
/// ```
/// # use clr::prelude::*;
/// # use clr::names::{NameTable, NamedColor};
/// let table: NameTable = vec![
///     NamedColor::new("000000", "black"),
///     NamedColor::new("FFFFFF", "white"),
/// ].into_iter().collect();
/// assert_eq!(RGBColor::new(30, 30, 30).name_in(&table).unwrap(), "black");
/// assert_eq!(table.lookup("ffffff"), Some("white"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: Vec<NamedColor>,
    // uppercase code to the index of its first entry
    index: HashMap<String, usize>,
}

impl NameTable {
    /// An empty table. Naming anything against it fails with [`ColorError::NoMatch`].
    pub fn new() -> NameTable {
        NameTable::default()
    }

    /// Adds an entry at the end of the table.
    pub fn push(&mut self, entry: NamedColor) {
        let position = self.entries.len();
        self.index
            .entry(entry.hex.code().to_ascii_uppercase())
            .or_insert(position);
        self.entries.push(entry);
    }

    /// The number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in order.
    pub fn iter(&self) -> ::std::slice::Iter<NamedColor> {
        self.entries.iter()
    }

    /// Reads a table from CSV with a header row naming the columns `hex` and `name`. Codes may
    /// start with `#`, and surrounding whitespace is ignored. Every code is checked as it's read.
    /// # Example
    /// ```
    /// # use clr::names::{ColorTable, NameTable};
    /// let csv = "hex,name\n#FF0000,red\n00ff00, green\n";
    /// let table = NameTable::from_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.lookup("00FF00"), Some("green"));
    /// ```
    /// # Errors
    /// [`NameTableError::Csv`] for unreadable or malformed CSV, and [`NameTableError::InvalidHex`]
    /// for the first entry with a bad code.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<NameTable, NameTableError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);
        NameTable::from_csv(reader)
    }

    /// Reads a table from a CSV file. See [`from_reader`](#method.from_reader) for the format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NameTable, NameTableError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;
        debug!("reading named colors from {}", path.as_ref().display());
        NameTable::from_csv(reader)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<NameTable, NameTableError> {
        let mut table = NameTable::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            let hex: HexColor = match record.hex.parse() {
                Ok(hex) => hex,
                Err(source) => {
                    return Err(NameTableError::InvalidHex {
                        name: record.name,
                        code: record.hex,
                        source,
                    })
                }
            };
            if let Some(first) = table.lookup(hex.code()) {
                warn!("{} is named both {} and {}; using {}", hex, first, record.name, first);
            }
            table.push(NamedColor { hex, name: record.name });
        }
        debug!("loaded {} named colors", table.len());
        Ok(table)
    }
}

impl ColorTable for NameTable {
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a NamedColor> + 'a> {
        Box::new(self.entries.iter())
    }
    fn lookup(&self, hex: &str) -> Option<&str> {
        self.index
            .get(&hex.to_ascii_uppercase())
            .map(|&i| self.entries[i].name.as_str())
    }
}

impl FromIterator<NamedColor> for NameTable {
    fn from_iter<I: IntoIterator<Item = NamedColor>>(iter: I) -> NameTable {
        let mut table = NameTable::new();
        for entry in iter {
            table.push(entry);
        }
        table
    }
}

// one row of a CSV name table
#[derive(Debug, Deserialize)]
struct Record {
    hex: String,
    name: String,
}

/// An error in loading a [`NameTable`].
#[derive(Debug)]
pub enum NameTableError {
    /// The CSV couldn't be read or didn't have the expected columns.
    Csv(csv::Error),
    /// An entry's hex code is malformed.
    InvalidHex {
        /// The entry's name.
        name: String,
        /// The code as written.
        code: String,
        /// What's wrong with it.
        source: HexParseError,
    },
}

impl fmt::Display for NameTableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameTableError::Csv(ref e) => write!(f, "could not read color names: {}", e),
            NameTableError::InvalidHex { ref name, ref code, ref source } => {
                write!(f, "bad hex code {:?} for {}: {}", code, name, source)
            }
        }
    }
}

impl Error for NameTableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            NameTableError::Csv(ref e) => Some(e),
            NameTableError::InvalidHex { ref source, .. } => Some(source),
        }
    }
}

impl From<csv::Error> for NameTableError {
    fn from(err: csv::Error) -> NameTableError {
        NameTableError::Csv(err)
    }
}

/// Finds the name of the entry in `table` closest to `color`. This is the algorithm behind
/// [`Color::name_in`](../color/trait.Color.html#method.name_in); see the module documentation for
/// the matching rules.
pub(crate) fn nearest_name<T: ColorTable + ?Sized>(
    color: &RGBColor,
    table: &T,
) -> Result<String, ColorError> {
    let hex = color.hex();
    let lab = color.cielab();

    let mut closest: Option<(&NamedColor, f64)> = None;
    for entry in table.entries() {
        if entry.hex.code().eq_ignore_ascii_case(&hex) {
            trace!("{} is exactly {}", hex, entry.name);
            return Ok(label(table, entry));
        }
        let dist = lab.distance(&entry.hex.to_cielab()?);
        let is_closer = match closest {
            Some((_, min_dist)) => dist < min_dist,
            None => true,
        };
        if is_closer {
            closest = Some((entry, dist));
        }
    }

    match closest {
        Some((entry, dist)) => {
            trace!("{} is closest to {} at distance {}", hex, entry.name, dist);
            Ok(label(table, entry))
        }
        None => Err(ColorError::NoMatch),
    }
}

// the table has the final say on names; fall back to the entry's own
fn label<T: ColorTable + ?Sized>(table: &T, entry: &NamedColor) -> String {
    table
        .lookup(entry.hex.code())
        .unwrap_or(&entry.name)
        .to_string()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use colors::HSVColor;

    fn primaries() -> NameTable {
        vec![
            NamedColor::new("FF0000", "red"),
            NamedColor::new("00FF00", "green"),
            NamedColor::new("0000FF", "blue"),
            NamedColor::new("000000", "black"),
            NamedColor::new("FFFFFF", "white"),
        ].into_iter()
            .collect()
    }

    #[test]
    fn test_nearest() {
        let table = primaries();
        let expected = hashmap! {
            RGBColor::new(240, 20, 30) => "red",
            RGBColor::new(10, 220, 40) => "green",
            RGBColor::new(30, 30, 200) => "blue",
            RGBColor::new(20, 20, 20) => "black",
            RGBColor::new(250, 250, 245) => "white",
        };
        for (color, name) in expected {
            assert_eq!(color.name_in(&table), Ok(name.to_string()), "naming {:?}", color);
        }
    }

    #[test]
    fn test_exact_match_wins() {
        // the first entry is scanned first and is the same color (trailing digits are ignored when
        // parsing), but only the second has exactly the same code
        let table: NameTable = vec![
            NamedColor::new("4B5C71", "almost slate"),
            NamedColor::new("4B5C70FF", "slate with alpha"),
            NamedColor::new("4B5C70", "slate"),
        ].into_iter()
            .collect();
        assert_eq!(RGBColor::new(75, 92, 112).name_in(&table), Ok("slate".to_string()));
        // without the exact code, the first entry at distance zero wins
        let no_exact: NameTable = table.iter().take(2).cloned().collect();
        assert_eq!(RGBColor::new(75, 92, 112).name_in(&no_exact),
                   Ok("slate with alpha".to_string()));
        // case doesn't matter for an exact match
        let lower: NameTable = vec![NamedColor::new("4b5c70", "slate")].into_iter().collect();
        assert_eq!(HexColor::new("4B5C70").name_in(&lower), Ok("slate".to_string()));
    }

    #[test]
    fn test_ties_go_to_first() {
        let table: NameTable = vec![
            NamedColor::new("000000", "first"),
            NamedColor::new("000000", "second"),
        ].into_iter()
            .collect();
        assert_eq!(RGBColor::new(10, 10, 10).name_in(&table), Ok("first".to_string()));
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("000000"), Some("first"));
    }

    #[test]
    fn test_errors() {
        assert_eq!(RGBColor::new(1, 2, 3).name_in(&NameTable::new()), Err(ColorError::NoMatch));
        let broken: NameTable = vec![NamedColor::new("nope", "broken")].into_iter().collect();
        assert_eq!(
            RGBColor::new(1, 2, 3).name_in(&broken),
            Err(ColorError::InvalidHex(HexParseError::TooShort))
        );
        // a malformed query fails before the table is looked at
        assert!(HexColor::new("QQQQQQ").name_in(&primaries()).is_err());
    }

    #[test]
    fn test_slice_table() {
        let entries = vec![
            NamedColor::new("FF0000", "red"),
            NamedColor::new("0000FF", "blue"),
        ];
        assert_eq!(HSVColor::new(5, 90, 90).name_in(&entries[..]), Ok("red".to_string()));
        assert_eq!(entries[..].lookup("0000ff"), Some("blue"));
        assert_eq!(entries[..].lookup("00FF00"), None);
    }

    #[test]
    fn test_lookup_falls_back_to_entry_name() {
        // a table that only knows some of its names
        struct Sparse(Vec<NamedColor>);
        impl ColorTable for Sparse {
            fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = &'a NamedColor> + 'a> {
                Box::new(self.0.iter())
            }
            fn lookup(&self, hex: &str) -> Option<&str> {
                if hex == "FF0000" {
                    Some("vermilion")
                } else {
                    None
                }
            }
        }
        let table = Sparse(vec![
            NamedColor::new("FF0000", "red"),
            NamedColor::new("0000FF", "blue"),
        ]);
        assert_eq!(RGBColor::new(255, 0, 0).name_in(&table), Ok("vermilion".to_string()));
        assert_eq!(RGBColor::new(0, 0, 250).name_in(&table), Ok("blue".to_string()));
    }

    #[test]
    fn test_csv_loading() {
        let csv = "hex,name\n#ff0000,red\n 00FF00 , green\n0000FF,blue\nFF0000,also red\n";
        let table = NameTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("FF0000"), Some("red"));
        assert_eq!(table.iter().map(|e| e.hex.code()).collect::<Vec<_>>(),
                   vec!["ff0000", "00FF00", "0000FF", "FF0000"]);
        assert_eq!(RGBColor::new(0, 250, 0).name_in(&table), Ok("green".to_string()));
    }

    #[test]
    fn test_csv_errors() {
        let bad_hex = "hex,name\nFF0000,red\nFF00,short\n";
        match NameTable::from_reader(bad_hex.as_bytes()) {
            Err(NameTableError::InvalidHex { name, code, source }) => {
                assert_eq!(name, "short");
                assert_eq!(code, "FF00");
                assert_eq!(source, HexParseError::TooShort);
            }
            other => panic!("expected a hex error, got {:?}", other),
        }
        let missing_column = "color,label\nFF0000,red\n";
        match NameTable::from_reader(missing_column.as_bytes()) {
            Err(e @ NameTableError::Csv(_)) => assert!(e.source().is_some()),
            other => panic!("expected a CSV error, got {:?}", other),
        }
        assert!(NameTable::from_path("/nonexistent/colors.csv").is_err());
    }
}
