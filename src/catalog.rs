#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::LengthUnit;
use crate::{
    CatalogError, CentralBody, OrbitError, OrbitResult, OrbitSampler, OrbitTrace,
    OrbitalElementSet, SampleInterval,
};

/// A named, ordered set of satellites and their orbital elements.
///
/// The catalog is plain configuration: build it once, then hand it (by
/// reference) to whatever needs it. Iteration follows insertion order.
///
/// # Example
/// ```
/// use frozen_orbits::{OrbitalElementSet, SatelliteCatalog};
///
/// # fn main() -> Result<(), frozen_orbits::OrbitError> {
/// let mut catalog = SatelliteCatalog::new();
/// catalog.insert("ELFO11", OrbitalElementSet::new(6_540_000.0, 0.6, 63.0, 0.0, 90.0, 0.0)?)?;
/// catalog.insert("ELFO12", OrbitalElementSet::new(6_540_000.0, 0.6, 63.0, 0.0, 90.0, 180.0)?)?;
///
/// assert_eq!(catalog.names().collect::<Vec<_>>(), ["ELFO11", "ELFO12"]);
/// assert!(catalog.insert("ELFO11", *catalog.require("ELFO12")?).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SatelliteCatalog {
    entries: Vec<(String, OrbitalElementSet)>,
}

impl SatelliteCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a satellite.
    ///
    /// # Errors
    /// Fails if a satellite with the same name is already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        elements: OrbitalElementSet,
    ) -> Result<(), CatalogError> {
        let name = name.into();

        if self.get(&name).is_some() {
            return Err(CatalogError::DuplicateSatellite(name));
        }

        self.entries.push((name, elements));
        Ok(())
    }

    /// Looks up a satellite by name.
    pub fn get(&self, name: &str) -> Option<&OrbitalElementSet> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, elements)| elements)
    }

    /// Looks up a satellite by name, failing if it isn't there.
    pub fn require(&self, name: &str) -> Result<&OrbitalElementSet, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownSatellite(name.to_string()))
    }

    /// Iterates over `(name, elements)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrbitalElementSet)> + '_ {
        self.entries
            .iter()
            .map(|(name, elements)| (name.as_str(), elements))
    }

    /// Iterates over the satellite names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Gets the number of satellites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no satellites.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Samples one full revolution of every satellite.
    ///
    /// # Errors
    /// Fails on the first satellite whose trace cannot be computed.
    pub fn traces(
        &self,
        samples: usize,
        interval: SampleInterval,
    ) -> OrbitResult<Vec<(&str, OrbitTrace)>> {
        self.iter()
            .map(|(name, elements)| -> OrbitResult<_> {
                let trace = OrbitSampler::new(*elements, samples)
                    .with_interval(interval)
                    .trace()?;
                Ok((name, trace))
            })
            .collect()
    }

    /// Gets the orbital period of every satellite around `body`, in seconds.
    ///
    /// # Errors
    /// Fails if the body's mass or `gravitational_constant` isn't strictly positive.
    pub fn periods(
        &self,
        body: &CentralBody,
        gravitational_constant: f64,
    ) -> OrbitResult<Vec<(&str, f64)>> {
        self.iter()
            .map(|(name, elements)| -> OrbitResult<_> {
                Ok((name, body.orbital_period(elements, gravitational_constant)?))
            })
            .collect()
    }
}

impl TryFrom<Vec<(String, OrbitalElementSet)>> for SatelliteCatalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<(String, OrbitalElementSet)>) -> Result<Self, Self::Error> {
        let mut catalog = Self::new();
        for (name, elements) in entries {
            catalog.insert(name, elements)?;
        }
        Ok(catalog)
    }
}

/// One satellite row of a [`CatalogConfig`].
///
/// Angles are in degrees and the semi-major axis in the document's
/// [`LengthUnit`].
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatelliteConfig {
    /// The satellite's name. Must be unique within the document.
    pub name: String,
    /// The semi-major axis.
    pub semi_major_axis: f64,
    /// The eccentricity, in `[0, 1)`.
    pub eccentricity: f64,
    /// The inclination, in degrees.
    pub inclination: f64,
    /// The right ascension of the ascending node, in degrees.
    pub long_asc_node: f64,
    /// The argument of periapsis, in degrees.
    pub arg_pe: f64,
    /// The mean anomaly, in degrees. Defaults to zero.
    #[serde(default)]
    pub mean_anomaly: f64,
}

/// A serialized satellite catalog.
///
/// ```json
/// {
///     "length_unit": "kilometers",
///     "satellites": [
///         { "name": "ELFO11", "semi_major_axis": 6540, "eccentricity": 0.6,
///           "inclination": 63, "long_asc_node": 0, "arg_pe": 90, "mean_anomaly": 0 }
///     ]
/// }
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// The unit every `semi_major_axis` in the document is given in.
    #[serde(default)]
    pub length_unit: LengthUnit,
    /// The satellites, in order.
    pub satellites: Vec<SatelliteConfig>,
}

#[cfg(feature = "serde")]
impl CatalogConfig {
    /// Validates every row and converts it into meters and radians.
    ///
    /// # Errors
    /// Fails on the first invalid row or duplicate name.
    pub fn into_catalog(self) -> OrbitResult<SatelliteCatalog> {
        let mut catalog = SatelliteCatalog::new();

        for row in self.satellites {
            let elements = OrbitalElementSet::with_unit(
                self.length_unit,
                row.semi_major_axis,
                row.eccentricity,
                row.inclination,
                row.long_asc_node,
                row.arg_pe,
                row.mean_anomaly,
            )
            .map_err(|source| OrbitError::InvalidCatalogEntry {
                satellite: row.name.clone(),
                source,
            })?;

            catalog.insert(row.name, elements)?;
        }

        tracing::debug!(
            satellites = catalog.len(),
            unit = ?self.length_unit,
            "loaded satellite catalog"
        );

        Ok(catalog)
    }
}

#[cfg(feature = "serde")]
impl SatelliteCatalog {
    /// Parses and validates a JSON [`CatalogConfig`] document.
    ///
    /// # Errors
    /// Fails if the document is malformed, or if any row is invalid.
    pub fn from_json_str(json: &str) -> OrbitResult<Self> {
        let config: CatalogConfig =
            serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;

        config.into_catalog()
    }
}
