//! This module contains presets for the central bodies that orbits are
//! computed around.

mod moon;

pub use moon::{the_moon, MOON_MASS, MOON_RADIUS};
