//! Natal chart construction: chart angles and zodiac placements.
//!
//! A [`NatalChart`] combines one [`JulianMoment`], one observer
//! [`GeoLocation`] and a set of body positions into the four chart angles
//! and a sign placement for every body.

pub mod angles;
pub mod error;
pub mod location;
pub mod zodiac;

use atlas_ephem::{Body, Planet, PlanetPosition};
use atlas_time::JulianMoment;
use serde::{Deserialize, Serialize};

pub use angles::{ChartAngles, ascendant_deg, midheaven_deg};
pub use error::ChartError;
pub use location::GeoLocation;
pub use zodiac::{
    ALL_SIGNS, Dms, Element, Modality, SignPosition, ZodiacSign, deg_to_dms, sign_position,
};

/// Zodiac placement of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    /// Ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    #[serde(flatten)]
    pub position: SignPosition,
    pub retrograde: bool,
}

impl BodyPlacement {
    pub fn from_position(p: &PlanetPosition) -> Self {
        Self {
            body: p.body,
            longitude_deg: p.longitude_deg,
            position: sign_position(p.longitude_deg),
            retrograde: p.retrograde,
        }
    }
}

/// Angles and placements for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub moment: JulianMoment,
    pub location: GeoLocation,
    /// Local sidereal time, degrees [0, 360).
    pub lst_deg: f64,
    pub angles: ChartAngles,
    /// One entry per input position, in input order.
    pub placements: Vec<BodyPlacement>,
}

impl NatalChart {
    /// Build the chart. `positions` is typically the output of
    /// `atlas_ephem::positions` for `moment.jd`.
    pub fn build(
        moment: &JulianMoment,
        location: &GeoLocation,
        positions: &[PlanetPosition],
    ) -> Self {
        let lst_deg = moment.local_sidereal_deg(location.longitude_deg);
        Self {
            moment: *moment,
            location: *location,
            lst_deg,
            angles: ChartAngles::compute(lst_deg, location.latitude_deg),
            placements: positions.iter().map(BodyPlacement::from_position).collect(),
        }
    }

    /// Placement of `body`, if it was among the input positions.
    pub fn placement(&self, body: Body) -> Option<&BodyPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    pub fn sun(&self) -> Option<&BodyPlacement> {
        self.placement(Body::Planet(Planet::Sun))
    }

    pub fn moon(&self) -> Option<&BodyPlacement> {
        self.placement(Body::Planet(Planet::Moon))
    }

    /// Zodiac placement of the Ascendant (the "rising sign").
    pub fn ascendant(&self) -> SignPosition {
        sign_position(self.angles.ascendant_deg)
    }

    pub fn midheaven(&self) -> SignPosition {
        sign_position(self.angles.midheaven_deg)
    }
}
