//! Body identifiers: the ten primary chart bodies and the optional minor set.

use serde::{Deserialize, Serialize};

/// The ten primary bodies that carry astrocartography lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All primary bodies in chart order.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// All primary bodies in chart order.
    pub const fn all() -> &'static [Planet; 10] {
        &ALL_PLANETS
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Optional points and small bodies, included only on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinorBody {
    /// Mean ascending lunar node.
    NorthNode,
    /// Mean descending lunar node, always North Node + 180°.
    SouthNode,
    /// Mean lunar apogee ("Black Moon Lilith").
    Lilith,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// All minor bodies in output order.
pub const ALL_MINOR_BODIES: [MinorBody; 8] = [
    MinorBody::NorthNode,
    MinorBody::SouthNode,
    MinorBody::Lilith,
    MinorBody::Chiron,
    MinorBody::Ceres,
    MinorBody::Pallas,
    MinorBody::Juno,
    MinorBody::Vesta,
];

impl MinorBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Lilith => "Lilith",
            Self::Chiron => "Chiron",
            Self::Ceres => "Ceres",
            Self::Pallas => "Pallas",
            Self::Juno => "Juno",
            Self::Vesta => "Vesta",
        }
    }

    pub const fn all() -> &'static [MinorBody; 8] {
        &ALL_MINOR_BODIES
    }
}

/// Any body the ephemeris can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Planet(Planet),
    Minor(MinorBody),
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Planet(p) => p.name(),
            Self::Minor(m) => m.name(),
        }
    }

    /// The primary body, if this is one.
    pub const fn planet(self) -> Option<Planet> {
        match self {
            Self::Planet(p) => Some(p),
            Self::Minor(_) => None,
        }
    }

    pub const fn is_minor(self) -> bool {
        matches!(self, Self::Minor(_))
    }
}

impl From<Planet> for Body {
    fn from(p: Planet) -> Self {
        Self::Planet(p)
    }
}

impl From<MinorBody> for Body {
    fn from(m: MinorBody) -> Self {
        Self::Minor(m)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
