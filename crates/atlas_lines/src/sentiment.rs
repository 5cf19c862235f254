//! Qualitative rating of each (planet, angle) line.
//!
//! A fixed 10 × 4 table; [`classify`] is a plain lookup and never looks at
//! a chart.
//!
//! | Planet  | MC        | IC        | ASC       | DSC       |
//! |---------|-----------|-----------|-----------|-----------|
//! | Sun     | positive  | neutral   | positive  | positive  |
//! | Moon    | neutral   | positive  | positive  | positive  |
//! | Mercury | positive  | neutral   | positive  | neutral   |
//! | Venus   | positive  | positive  | positive  | positive  |
//! | Mars    | neutral   | difficult | difficult | difficult |
//! | Jupiter | positive  | positive  | positive  | positive  |
//! | Saturn  | neutral   | difficult | difficult | difficult |
//! | Uranus  | neutral   | difficult | neutral   | difficult |
//! | Neptune | difficult | neutral   | difficult | neutral   |
//! | Pluto   | neutral   | difficult | difficult | difficult |
//!
//! The benefics (Venus, Jupiter) are positive everywhere. The malefics
//! are difficult on IC/ASC/DSC with these exceptions:
//!
//! - Mars, Saturn, Uranus and Pluto are neutral on the MC, where their
//!   drive reads as career ambition.
//! - Uranus is neutral on the ASC (self-reinvention).
//! - Neptune is difficult on MC and ASC but neutral on IC and DSC.
//!
//! Among the luminaries and Mercury: the Sun is neutral on the IC, the
//! Moon neutral on the MC, Mercury neutral on IC and DSC.

use atlas_ephem::{ALL_PLANETS, Planet};
use serde::{Deserialize, Serialize};

use crate::types::{ALL_ANGLES, AngleKind};

/// Qualitative tone of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSentiment {
    Positive,
    Neutral,
    Difficult,
}

impl LineSentiment {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Difficult => "difficult",
        }
    }
}

use LineSentiment::{Difficult as D, Neutral as N, Positive as P};

/// Rows follow [`ALL_PLANETS`], columns follow [`ALL_ANGLES`].
static SENTIMENT_TABLE: [[LineSentiment; 4]; 10] = [
    [P, N, P, P], // Sun
    [N, P, P, P], // Moon
    [P, N, P, N], // Mercury
    [P, P, P, P], // Venus
    [N, D, D, D], // Mars
    [P, P, P, P], // Jupiter
    [N, D, D, D], // Saturn
    [N, D, N, D], // Uranus
    [D, N, D, N], // Neptune
    [N, D, D, D], // Pluto
];

/// Sentiment of `planet` on `angle`.
pub fn classify(planet: Planet, angle: AngleKind) -> LineSentiment {
    SENTIMENT_TABLE[planet.index()][angle.index()]
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRating {
    pub planet: Planet,
    pub angle: AngleKind,
    pub sentiment: LineSentiment,
}

/// All 40 ratings, planet-major.
pub fn all_ratings() -> Vec<LineRating> {
    ALL_PLANETS
        .iter()
        .flat_map(|&planet| {
            ALL_ANGLES.iter().map(move |&angle| LineRating {
                planet,
                angle,
                sentiment: classify(planet, angle),
            })
        })
        .collect()
}
