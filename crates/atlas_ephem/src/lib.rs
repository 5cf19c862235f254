//! Low-precision geocentric ephemeris from mean orbital elements.
//!
//! Each body is placed by evaluating a fixed table of mean elements,
//! adding the equation of center to the mean anomaly, and (for
//! heliocentric orbits) subtracting the Earth's position. No numerical
//! integration and no data files are involved.
//!
//! Longitudes are referred to the mean equinox of date (tropical zodiac).
//! Heliocentric tables are J2000 and get rotated by the general
//! precession; the lunar series and lunar points are already of date.
//!
//! # Accuracy
//!
//! Over 1800–2050 the geocentric longitude error stays within roughly one
//! degree for the Moon and the outer planets, and within a few tenths of a
//! degree for the Sun and inner planets. Aberration, nutation and
//! light-time are ignored. That is ample for astrocartography, where a
//! degree of longitude moves a line by at most ~110 km on the ground, but
//! it is not an astrometric ephemeris.
//!
//! Minor bodies (see [`MinorBody`]) are coarser still; the asteroid
//! elements ignore planetary perturbations.

pub mod body;
pub mod elements;
pub mod kepler;
pub mod moon;

use atlas_frames::{j2000_to_date_longitude, normalize_360, wrap_delta};
use atlas_time::{J2000_JD, centuries_since_j2000};
use serde::{Deserialize, Serialize};

pub use body::{ALL_MINOR_BODIES, ALL_PLANETS, Body, MinorBody, Planet};
pub use elements::{ElementsAt, OrbitalElements};

/// Default forward step for the retrograde test, days.
pub const DEFAULT_RETROGRADE_STEP_DAYS: f64 = 0.01;

/// Ephemeris options supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Append the minor bodies after the ten primary bodies.
    pub include_minor_bodies: bool,
    /// Forward time step used to measure the longitude rate, days.
    pub retrograde_step_days: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            include_minor_bodies: false,
            retrograde_step_days: DEFAULT_RETROGRADE_STEP_DAYS,
        }
    }
}

/// Geocentric ecliptic position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees [-90, 90].
    pub latitude_deg: f64,
    /// Longitude rate, degrees per day.
    pub speed_deg_per_day: f64,
    /// True when the longitude is decreasing.
    pub retrograde: bool,
}

/// Geocentric ecliptic longitude and latitude in degrees.
///
/// `jd` is a Julian Date; the difference between universal and dynamical
/// time (about a minute) is below this ephemeris' precision and ignored.
/// Longitude is in [0, 360).
pub fn ecliptic_lon_lat(body: Body, jd: f64) -> (f64, f64) {
    let days = jd - J2000_JD;
    let t = centuries_since_j2000(jd);
    let (lon, lat) = match body {
        Body::Planet(p) => match p {
            Planet::Sun => {
                let earth = earth_position(days);
                of_date(kepler::lon_lat_deg(&[-earth[0], -earth[1], -earth[2]]), t)
            }
            Planet::Moon => moon::moon_lon_lat_deg(days),
            Planet::Mercury => geocentric(&elements::MERCURY, days, t),
            Planet::Venus => geocentric(&elements::VENUS, days, t),
            Planet::Mars => geocentric(&elements::MARS, days, t),
            Planet::Jupiter => geocentric(&elements::JUPITER, days, t),
            Planet::Saturn => geocentric(&elements::SATURN, days, t),
            Planet::Uranus => geocentric(&elements::URANUS, days, t),
            Planet::Neptune => geocentric(&elements::NEPTUNE, days, t),
            Planet::Pluto => geocentric(&elements::PLUTO, days, t),
        },
        Body::Minor(m) => match m {
            MinorBody::NorthNode => (moon::mean_node_deg(t), 0.0),
            MinorBody::SouthNode => (moon::mean_node_deg(t) + 180.0, 0.0),
            MinorBody::Lilith => (moon::mean_apogee_deg(t), 0.0),
            MinorBody::Chiron => geocentric(&elements::CHIRON, days, t),
            MinorBody::Ceres => geocentric(&elements::CERES, days, t),
            MinorBody::Pallas => geocentric(&elements::PALLAS, days, t),
            MinorBody::Juno => geocentric(&elements::JUNO, days, t),
            MinorBody::Vesta => geocentric(&elements::VESTA, days, t),
        },
    };
    (normalize_360(lon), lat)
}

fn earth_position(days: f64) -> [f64; 3] {
    kepler::heliocentric_position(&elements::EARTH.at(days))
}

fn of_date((lon, lat): (f64, f64), t: f64) -> (f64, f64) {
    (j2000_to_date_longitude(lon, t), lat)
}

/// Geocentric lon/lat of a body on a heliocentric orbit, equinox of date.
fn geocentric(table: &OrbitalElements, days: f64, t: f64) -> (f64, f64) {
    let earth = earth_position(days);
    let target = kepler::heliocentric_position(&table.at(days));
    let xyz = [
        target[0] - earth[0],
        target[1] - earth[1],
        target[2] - earth[2],
    ];
    of_date(kepler::lon_lat_deg(&xyz), t)
}

/// Full position of `body` at `jd`, including rate and retrograde flag.
///
/// The rate is the wrapped longitude difference between `jd` and
/// `jd + config.retrograde_step_days`, so a body crossing 360°/0° is not
/// mistaken for a retrograde one.
pub fn position(body: Body, jd: f64, config: &EphemerisConfig) -> PlanetPosition {
    let (lon, lat) = ecliptic_lon_lat(body, jd);
    let step = config.retrograde_step_days;
    let (lon_next, _) = ecliptic_lon_lat(body, jd + step);
    let speed = wrap_delta(lon, lon_next) / step;

    PlanetPosition {
        body,
        longitude_deg: lon,
        latitude_deg: lat,
        speed_deg_per_day: speed,
        retrograde: speed < 0.0,
    }
}

/// Positions of the primary bodies, followed by the minor bodies when
/// `config.include_minor_bodies` is set.
pub fn positions(jd: f64, config: &EphemerisConfig) -> Vec<PlanetPosition> {
    let minor: &[MinorBody] = if config.include_minor_bodies {
        &ALL_MINOR_BODIES
    } else {
        &[]
    };
    let out: Vec<PlanetPosition> = ALL_PLANETS
        .iter()
        .map(|&p| Body::Planet(p))
        .chain(minor.iter().map(|&m| Body::Minor(m)))
        .map(|body| position(body, jd, config))
        .collect();
    tracing::trace!(jd, count = out.len(), "computed body positions");
    out
}
