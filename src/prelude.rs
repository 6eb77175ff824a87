//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: the [`Color`] trait, the hub type [`RGBColor`], the error type [`ColorError`], and the
//! [`ColorTable`] trait needed to call `lookup` on a table. The other color types live in the
//! [`colors`](../colors/index.html) module.

pub use color::{Color, ColorError, RGBColor};
pub use names::ColorTable;
