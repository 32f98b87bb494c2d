//! This module contains preset satellite catalogs.
//!
//! The elliptical lunar frozen orbits (ELFOs) below keep their eccentricity
//! and argument of periapsis nearly constant under lunar gravity, which
//! keeps apolune parked over one hemisphere.

use crate::{LengthUnit, OrbitResult, OrbitalElementSet, SatelliteCatalog};

/// Semi-major axis shared by every ELFO slot, in kilometers.
const ELFO_SEMI_MAJOR_AXIS_KM: f64 = 6540.0;

const ELFO_ECCENTRICITY: f64 = 0.6;

const ELFO_ARG_PE: f64 = 90.0;

/// Mean anomalies of the four slots in each plane, in degrees.
const SLOT_MEAN_ANOMALIES: [(&str, f64); 4] = [("1", 0.0), ("2", 180.0), ("3", 90.0), ("4", 270.0)];

/// `(plane prefix, inclination in degrees, ascending node in degrees)`
const PLANES: [(&str, f64, f64); 2] = [("ELFO1", 63.0, 0.0), ("ELFO2", 49.4, 180.0)];

/// Returns the eight-satellite ELFO constellation: two planes of four.
///
/// - ELFO11 to ELFO14: `i = 63°`, `Ω = 0°`
/// - ELFO21 to ELFO24: `i = 49.4°`, `Ω = 180°`
///
/// All share `a = 6540 km`, `e = 0.6`, `ω = 90°`, with the four slots at
/// mean anomalies 0°, 180°, 90° and 270°.
pub fn elfo_constellation() -> OrbitResult<SatelliteCatalog> {
    let mut catalog = SatelliteCatalog::new();

    for (prefix, inclination, long_asc_node) in PLANES {
        for (slot, mean_anomaly) in SLOT_MEAN_ANOMALIES {
            let elements = OrbitalElementSet::with_unit(
                LengthUnit::Kilometers,
                ELFO_SEMI_MAJOR_AXIS_KM,
                ELFO_ECCENTRICITY,
                inclination,
                long_asc_node,
                ELFO_ARG_PE,
                mean_anomaly,
            )?;

            catalog.insert(format!("{prefix}{slot}"), elements)?;
        }
    }

    tracing::debug!(satellites = catalog.len(), "built ELFO constellation");

    Ok(catalog)
}
