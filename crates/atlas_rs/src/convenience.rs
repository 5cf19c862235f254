//! One-call entry points from a [`BirthData`] record.
//!
//! Each function validates the whole input (birth fields and config)
//! before computing anything.

use atlas_chart::{GeoLocation, NatalChart};
use atlas_config::EngineConfig;
use atlas_ephem::{PlanetPosition, positions};
use atlas_lines::{AstroLine, LineRating, all_ratings, generate_lines};
use atlas_time::JulianMoment;
use serde::{Deserialize, Serialize};

use crate::birth::BirthData;
use crate::error::InputError;

/// Everything computed for one birth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub birth: BirthData,
    pub moment: JulianMoment,
    pub positions: Vec<PlanetPosition>,
    pub chart: NatalChart,
    pub lines: Vec<AstroLine>,
    pub ratings: Vec<LineRating>,
}

struct Validated {
    moment: JulianMoment,
    location: GeoLocation,
}

fn validate(birth: &BirthData, config: &EngineConfig) -> Result<Validated, InputError> {
    config.validate()?;
    let location = birth.location()?;
    let moment = birth.moment()?;
    Ok(Validated { moment, location })
}

/// Julian Day and GST of the birth moment.
pub fn julian_moment(birth: &BirthData) -> Result<JulianMoment, InputError> {
    birth.location()?;
    birth.moment()
}

/// Body positions at the birth moment.
pub fn planet_positions(
    birth: &BirthData,
    config: &EngineConfig,
) -> Result<Vec<PlanetPosition>, InputError> {
    let v = validate(birth, config)?;
    Ok(positions(v.moment.jd, &config.ephemeris()))
}

pub fn natal_chart(birth: &BirthData, config: &EngineConfig) -> Result<NatalChart, InputError> {
    let v = validate(birth, config)?;
    let pos = positions(v.moment.jd, &config.ephemeris());
    Ok(NatalChart::build(&v.moment, &v.location, &pos))
}

/// Astrocartography lines for the ten primary planets.
pub fn astro_lines(birth: &BirthData, config: &EngineConfig) -> Result<Vec<AstroLine>, InputError> {
    let v = validate(birth, config)?;
    let pos = positions(v.moment.jd, &config.ephemeris());
    Ok(generate_lines(&pos, v.moment.gst_deg, &config.lines)?)
}

/// The fixed 40-entry sentiment table.
pub fn line_ratings() -> Vec<LineRating> {
    all_ratings()
}

/// Positions, chart, lines and ratings in one pass.
pub fn chart_report(birth: &BirthData, config: &EngineConfig) -> Result<ChartReport, InputError> {
    let v = validate(birth, config)?;
    tracing::debug!(jd = v.moment.jd, gst = v.moment.gst_deg, "computing chart report");

    let pos = positions(v.moment.jd, &config.ephemeris());
    let chart = NatalChart::build(&v.moment, &v.location, &pos);
    let lines = generate_lines(&pos, v.moment.gst_deg, &config.lines)?;

    tracing::debug!(
        bodies = pos.len(),
        lines = lines.len(),
        "chart report complete"
    );
    Ok(ChartReport {
        birth: birth.clone(),
        moment: v.moment,
        positions: pos,
        chart,
        lines,
        ratings: all_ratings(),
    })
}
