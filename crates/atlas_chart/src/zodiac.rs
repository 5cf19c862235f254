//! Tropical zodiac signs, elements and modalities.
//!
//! The ecliptic is divided into 12 equal signs of 30° starting from Aries
//! at the vernal equinox. Elements cycle fire → earth → air → water and
//! modalities cycle cardinal → fixed → mutable, both by sign index.

use std::fmt::{Display, Formatter};

use atlas_frames::normalize_360;
use serde::{Deserialize, Serialize};

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality (quality) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

const ELEMENT_CYCLE: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];
const MODALITY_CYCLE: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn element(self) -> Element {
        ELEMENT_CYCLE[self.index() as usize % 4]
    }

    pub const fn modality(self) -> Modality {
        MODALITY_CYCLE[self.index() as usize % 3]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Fixed => "fixed",
            Self::Mutable => "mutable",
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds [0, 60).
    pub seconds: f64,
}

/// Split an angle into degrees, arc-minutes and arc-seconds.
///
/// The sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let arcmin = deg.abs() * 60.0;
    let whole_deg = (arcmin / 60.0).floor();
    let minutes = (arcmin - whole_deg * 60.0).floor().min(59.0);
    Dms {
        degrees: whole_deg as u16,
        minutes: minutes as u8,
        seconds: (arcmin - whole_deg * 60.0 - minutes) * 60.0,
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:02}″", self.degrees, self.minutes, self.seconds.floor() as u8)
    }
}

/// Placement of an ecliptic longitude in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Decimal degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub element: Element,
    pub modality: Modality,
}

impl SignPosition {
    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degree_in_sign)
    }
}

impl Display for SignPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dms(), self.sign)
    }
}

// Largest f64 below 30.0.
const MAX_DEGREE_IN_SIGN: f64 = 29.999_999_999_999_996;

/// Sign, degree, element and modality of an ecliptic longitude.
///
/// The longitude is normalized first. Values arbitrarily close to 360 stay
/// in Pisces rather than rolling into a thirteenth sign.
pub fn sign_position(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    let degree_in_sign = (lon - idx as f64 * 30.0).clamp(0.0, MAX_DEGREE_IN_SIGN);
    let sign = ALL_SIGNS[idx];
    SignPosition {
        sign,
        degree_in_sign,
        element: sign.element(),
        modality: sign.modality(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Taurus.element(), Element::Earth);
        assert_eq!(ZodiacSign::Gemini.element(), Element::Air);
        assert_eq!(ZodiacSign::Cancer.element(), Element::Water);
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn modalities_cycle() {
        assert_eq!(ZodiacSign::Aries.modality(), Modality::Cardinal);
        assert_eq!(ZodiacSign::Taurus.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Gemini.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Capricorn.modality(), Modality::Cardinal);
        assert_eq!(ZodiacSign::Pisces.modality(), Modality::Mutable);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(sign_position(0.0).sign, ZodiacSign::Aries);
        assert_eq!(sign_position(29.999).sign, ZodiacSign::Aries);
        assert_eq!(sign_position(30.0).sign, ZodiacSign::Taurus);
        assert_eq!(sign_position(330.0).sign, ZodiacSign::Pisces);
    }

    #[test]
    fn just_below_360_is_late_pisces() {
        let p = sign_position(359.999);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert!((p.degree_in_sign - 29.999).abs() < 1e-9);

        let p = sign_position(f64::from_bits(360.0_f64.to_bits() - 1));
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert!(p.degree_in_sign < 30.0);
    }

    #[test]
    fn negative_and_large_inputs_normalize() {
        assert_eq!(sign_position(-10.0).sign, ZodiacSign::Pisces);
        assert_eq!(sign_position(725.0).sign, ZodiacSign::Aries);
    }

    #[test]
    fn dms_breakdown() {
        let d = deg_to_dms(24.5);
        assert_eq!((d.degrees, d.minutes), (24, 30));
        assert!(d.seconds.abs() < 1e-9);
        assert_eq!(sign_position(84.5).to_string(), "24°30′00″ Gemini");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ZodiacSign::from_name("scorpio"), Some(ZodiacSign::Scorpio));
        assert_eq!(ZodiacSign::from_name("Ophiuchus"), None);
    }
}
