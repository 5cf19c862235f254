//! Line geometry value types.

use std::fmt::{Display, Formatter};

use atlas_ephem::Planet;
use serde::{Deserialize, Serialize};

/// The four chart angles a body can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleKind {
    /// Upper culmination (Midheaven).
    #[serde(rename = "MC")]
    Mc,
    /// Lower culmination (Imum Coeli).
    #[serde(rename = "IC")]
    Ic,
    /// Rising on the eastern horizon.
    #[serde(rename = "ASC")]
    Asc,
    /// Setting on the western horizon.
    #[serde(rename = "DSC")]
    Dsc,
}

/// All four angles, in table order.
pub const ALL_ANGLES: [AngleKind; 4] =
    [AngleKind::Mc, AngleKind::Ic, AngleKind::Asc, AngleKind::Dsc];

impl AngleKind {
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Mc => "MC",
            Self::Ic => "IC",
            Self::Asc => "ASC",
            Self::Dsc => "DSC",
        }
    }

    /// 0-based index into [`ALL_ANGLES`].
    pub const fn index(self) -> usize {
        match self {
            Self::Mc => 0,
            Self::Ic => 1,
            Self::Asc => 2,
            Self::Dsc => 3,
        }
    }

    /// Meridian lines (MC/IC) are latitude-independent.
    pub const fn is_meridian(self) -> bool {
        matches!(self, Self::Mc | Self::Ic)
    }

    pub fn from_abbrev(s: &str) -> Option<Self> {
        ALL_ANGLES
            .iter()
            .copied()
            .find(|a| a.abbrev().eq_ignore_ascii_case(s.trim()))
    }
}

impl Display for AngleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A vertex on the Earth's surface, degrees.
///
/// Longitude is east positive and may leave [-180, 180) inside an
/// unwrapped segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// One piece of a line: a drawable run of vertices, or a latitude band
/// where the line does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LinePiece {
    Segment(Vec<GeoPoint>),
    /// Sampled latitudes `from_lat..=to_lat` had no solution.
    Gap { from_lat: f64, to_lat: f64 },
}

/// Geographic locus where `planet` sits on `angle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroLine {
    pub planet: Planet,
    pub angle: AngleKind,
    /// Pieces in south-to-north order of the latitudes they cover.
    pub pieces: Vec<LinePiece>,
}

impl AstroLine {
    /// Vertex runs, skipping gaps.
    pub fn segments(&self) -> impl Iterator<Item = &[GeoPoint]> {
        self.pieces.iter().filter_map(|p| match p {
            LinePiece::Segment(points) => Some(points.as_slice()),
            LinePiece::Gap { .. } => None,
        })
    }

    /// Latitude bands with no vertices.
    pub fn gaps(&self) -> impl Iterator<Item = (f64, f64)> {
        self.pieces.iter().filter_map(|p| match p {
            LinePiece::Gap { from_lat, to_lat } => Some((*from_lat, *to_lat)),
            LinePiece::Segment(_) => None,
        })
    }

    pub fn point_count(&self) -> usize {
        self.segments().map(<[GeoPoint]>::len).sum()
    }

    pub fn is_continuous(&self) -> bool {
        self.pieces.len() == 1 && self.gaps().next().is_none()
    }
}
