//! Prints the orbital period of every ELFO satellite, then a coarse
//! trace of each orbit as CSV (`satellite,index,x_km,y_km,z_km`).
//!
//! Run with `RUST_LOG=frozen_orbits=debug` to see what the library logs.

use std::error::Error;
use std::io::{self, Write};

use frozen_orbits::{
    body_presets::the_moon, catalog_presets::elfo_constellation, seconds_to_hours, LengthUnit,
    SampleInterval, GRAVITATIONAL_CONSTANT,
};
use tracing_subscriber::EnvFilter;

const TRACE_SAMPLES: usize = 100;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let moon = the_moon();
    let catalog = elfo_constellation()?;

    for (name, period) in catalog.periods(&moon, GRAVITATIONAL_CONSTANT)? {
        eprintln!("{name}: period {:.4} h", seconds_to_hours(period));
    }

    let mut lock = io::stdout().lock();
    writeln!(&mut lock, "satellite,index,x_km,y_km,z_km")?;

    for (name, trace) in catalog.traces(TRACE_SAMPLES, SampleInterval::Closed)? {
        for (index, position) in trace.positions().enumerate() {
            let km = position.to_array().map(|c| LengthUnit::Kilometers.from_meters(c));
            writeln!(&mut lock, "{name},{index},{},{},{}", km[0], km[1], km[2])?;
        }
    }

    Ok(())
}
