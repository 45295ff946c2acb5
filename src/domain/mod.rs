//! Domain Layer
//!
//! The catalog itself - pure data operations without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Products and the inventory that owns them
//! - `value_objects/` - Prices and numeric input parsing
//!
//! Every operation here returns a value (an outcome enum or rendered text)
//! instead of printing, so the menu layer decides how things are shown.

pub mod entities;
pub mod value_objects;
