//! Fan-out of line tracing over an arena of independent tasks.
//!
//! Each (planet, angle) pair becomes one [`LineTask`] holding everything
//! needed to trace it. The arena is traced in parallel with rayon and
//! collected back in arena order, so output order never depends on
//! scheduling.

use atlas_ephem::{Planet, PlanetPosition};
use atlas_frames::{EquatorialCoords, ecliptic_to_equatorial};
use rayon::prelude::*;

use crate::config::LineConfig;
use crate::error::LineError;
use crate::trace::trace_pieces;
use crate::types::{ALL_ANGLES, AngleKind, AstroLine};

/// Inputs for tracing one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTask {
    pub planet: Planet,
    pub angle: AngleKind,
    pub equatorial: EquatorialCoords,
}

impl LineTask {
    /// Trace this task over `latitudes` (south to north).
    pub fn trace(&self, gst_deg: f64, latitudes: &[f64]) -> AstroLine {
        let pieces = trace_pieces(self.angle, &self.equatorial, gst_deg, latitudes);
        tracing::trace!(
            planet = self.planet.name(),
            angle = self.angle.abbrev(),
            pieces = pieces.len(),
            "traced line"
        );
        AstroLine {
            planet: self.planet,
            angle: self.angle,
            pieces,
        }
    }
}

/// One task per angle for every primary planet in `positions`, in input
/// order. Minor bodies carry no lines and are skipped.
pub fn build_tasks(positions: &[PlanetPosition]) -> Vec<LineTask> {
    positions
        .iter()
        .filter_map(|p| p.body.planet().map(|planet| (planet, p)))
        .flat_map(|(planet, p)| {
            let equatorial = ecliptic_to_equatorial(p.longitude_deg, p.latitude_deg);
            ALL_ANGLES.iter().map(move |&angle| LineTask {
                planet,
                angle,
                equatorial,
            })
        })
        .collect()
}

/// Trace every task in parallel.
pub fn run_tasks(
    tasks: &[LineTask],
    gst_deg: f64,
    config: &LineConfig,
) -> Result<Vec<AstroLine>, LineError> {
    config.validate()?;
    let latitudes = config.latitudes();
    let lines: Vec<AstroLine> = tasks
        .par_iter()
        .map(|task| task.trace(gst_deg, &latitudes))
        .collect();
    tracing::debug!(
        lines = lines.len(),
        samples = latitudes.len(),
        "traced astrocartography lines"
    );
    Ok(lines)
}

/// Build the task arena for `positions` and trace it.
pub fn generate_lines(
    positions: &[PlanetPosition],
    gst_deg: f64,
    config: &LineConfig,
) -> Result<Vec<AstroLine>, LineError> {
    run_tasks(&build_tasks(positions), gst_deg, config)
}
