//! Converts ASCII art into HuC6270 planar tile and sprite patterns.
//!
//! Every character of the art is looked up in a translation table of up to
//! sixteen entries; its position is the pixel's 4-bit value. The values are
//! spread over four bitplanes in the layout of the selected [`mode::Mode`] and
//! rendered as a C `uint16_t` array.

#![no_std]

pub mod art;
pub mod error;
pub mod fs;
pub mod job;
pub mod mode;
pub mod number;
pub mod planar;
pub mod render;
pub mod sheet;
pub mod xlate;


extern crate alloc;

pub use error::{Error, Result};
pub use job::{Conversion, Job};
pub use mode::Mode;
pub use sheet::Sheet;
