//! "The Moon is Earth's only natural satellite."
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Moon)

use crate::CentralBody;

/// The mass of the Moon, in kilograms.
pub const MOON_MASS: f64 = 7.34767309e22;

/// The mean radius of the Moon, in meters.
pub const MOON_RADIUS: f64 = 1.7374e6;

/// Returns the Moon.
pub fn the_moon() -> CentralBody {
    CentralBody {
        name: "The Moon".to_string(),
        mass: MOON_MASS,
        radius: MOON_RADIUS,
    }
}
