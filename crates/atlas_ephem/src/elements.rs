//! Mean orbital element tables.
//!
//! Planet rows (and the Earth–Moon barycenter) are the J2000 elements and
//! per-century rates of Standish, "Approximate Positions of the Planets"
//! (JPL, Table 1, fit interval 1800–2050). The mean-longitude rate is
//! stored as a mean motion per day.
//!
//! Chiron and the four main-belt asteroids use fixed osculating elements
//! near epoch J2000.0 with a two-body mean motion. Planetary perturbations
//! on these bodies are ignored, so their error grows away from 2000;
//! treat them as indicative positions only.

use atlas_time::DAYS_PER_CENTURY;

/// Mean elements at J2000.0 with linear drift.
///
/// Rates ending in `_per_century` are per Julian century of 36525 days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub semi_major_axis_per_century: f64,
    pub eccentricity: f64,
    pub eccentricity_per_century: f64,
    pub inclination_deg: f64,
    pub inclination_per_century: f64,
    /// Mean longitude at J2000.0, degrees.
    pub mean_longitude_deg: f64,
    /// Mean motion, degrees per day.
    pub mean_motion_deg_per_day: f64,
    /// Longitude of perihelion ϖ = Ω + ω, degrees.
    pub perihelion_longitude_deg: f64,
    pub perihelion_per_century: f64,
    /// Longitude of the ascending node Ω, degrees.
    pub node_longitude_deg: f64,
    pub node_per_century: f64,
}

/// Elements evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub perihelion_longitude_deg: f64,
    pub node_longitude_deg: f64,
}

impl ElementsAt {
    /// Mean anomaly M = L − ϖ, degrees (unnormalized).
    pub fn mean_anomaly_deg(&self) -> f64 {
        self.mean_longitude_deg - self.perihelion_longitude_deg
    }
}

impl OrbitalElements {
    /// Evaluate the elements `days` after J2000.0.
    pub fn at(&self, days: f64) -> ElementsAt {
        let t = days / DAYS_PER_CENTURY;
        ElementsAt {
            semi_major_axis_au: self.semi_major_axis_au + self.semi_major_axis_per_century * t,
            eccentricity: self.eccentricity + self.eccentricity_per_century * t,
            inclination_deg: self.inclination_deg + self.inclination_per_century * t,
            mean_longitude_deg: self.mean_longitude_deg + self.mean_motion_deg_per_day * days,
            perihelion_longitude_deg: self.perihelion_longitude_deg
                + self.perihelion_per_century * t,
            node_longitude_deg: self.node_longitude_deg + self.node_per_century * t,
        }
    }

    /// Elements with no secular drift besides the mean motion.
    const fn fixed(
        a: f64,
        e: f64,
        i: f64,
        mean_longitude: f64,
        mean_motion: f64,
        perihelion: f64,
        node: f64,
    ) -> Self {
        Self {
            semi_major_axis_au: a,
            semi_major_axis_per_century: 0.0,
            eccentricity: e,
            eccentricity_per_century: 0.0,
            inclination_deg: i,
            inclination_per_century: 0.0,
            mean_longitude_deg: mean_longitude,
            mean_motion_deg_per_day: mean_motion,
            perihelion_longitude_deg: perihelion,
            perihelion_per_century: 0.0,
            node_longitude_deg: node,
            node_per_century: 0.0,
        }
    }
}

#[rustfmt::skip]
pub static MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 0.387_099_27,  semi_major_axis_per_century: 0.000_000_37,
    eccentricity: 0.205_635_93,        eccentricity_per_century: 0.000_019_06,
    inclination_deg: 7.004_979_02,     inclination_per_century: -0.005_947_49,
    mean_longitude_deg: 252.250_323_50,
    mean_motion_deg_per_day: 149_472.674_111_75 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 77.457_796_28, perihelion_per_century: 0.160_476_89,
    node_longitude_deg: 48.330_765_93,       node_per_century: -0.125_340_81,
};

#[rustfmt::skip]
pub static VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 0.723_335_66,  semi_major_axis_per_century: 0.000_003_90,
    eccentricity: 0.006_776_72,        eccentricity_per_century: -0.000_041_07,
    inclination_deg: 3.394_676_05,     inclination_per_century: -0.000_788_90,
    mean_longitude_deg: 181.979_099_50,
    mean_motion_deg_per_day: 58_517.815_387_29 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 131.602_467_18, perihelion_per_century: 0.002_683_29,
    node_longitude_deg: 76.679_842_55,        node_per_century: -0.277_694_18,
};

/// Earth–Moon barycenter; stands in for the Earth.
#[rustfmt::skip]
pub static EARTH: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 1.000_002_61,  semi_major_axis_per_century: 0.000_005_62,
    eccentricity: 0.016_711_23,        eccentricity_per_century: -0.000_043_92,
    inclination_deg: -0.000_015_31,    inclination_per_century: -0.012_946_68,
    mean_longitude_deg: 100.464_571_66,
    mean_motion_deg_per_day: 35_999.372_449_81 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 102.937_681_93, perihelion_per_century: 0.323_273_64,
    node_longitude_deg: 0.0,                  node_per_century: 0.0,
};

#[rustfmt::skip]
pub static MARS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 1.523_710_34,  semi_major_axis_per_century: 0.000_018_47,
    eccentricity: 0.093_394_10,        eccentricity_per_century: 0.000_078_82,
    inclination_deg: 1.849_691_42,     inclination_per_century: -0.008_131_31,
    mean_longitude_deg: -4.553_432_05,
    mean_motion_deg_per_day: 19_140.302_684_99 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: -23.943_629_59, perihelion_per_century: 0.444_410_88,
    node_longitude_deg: 49.559_538_91,        node_per_century: -0.292_573_43,
};

#[rustfmt::skip]
pub static JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 5.202_887_00,  semi_major_axis_per_century: -0.000_116_07,
    eccentricity: 0.048_386_24,        eccentricity_per_century: -0.000_132_53,
    inclination_deg: 1.304_396_95,     inclination_per_century: -0.001_837_14,
    mean_longitude_deg: 34.396_440_51,
    mean_motion_deg_per_day: 3_034.746_127_75 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 14.728_479_83, perihelion_per_century: 0.212_526_68,
    node_longitude_deg: 100.473_909_09,      node_per_century: 0.204_691_06,
};

#[rustfmt::skip]
pub static SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 9.536_675_94,  semi_major_axis_per_century: -0.001_250_60,
    eccentricity: 0.053_861_79,        eccentricity_per_century: -0.000_509_91,
    inclination_deg: 2.485_991_87,     inclination_per_century: 0.001_936_09,
    mean_longitude_deg: 49.954_244_23,
    mean_motion_deg_per_day: 1_222.493_622_01 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 92.598_878_31, perihelion_per_century: -0.418_972_16,
    node_longitude_deg: 113.662_424_48,      node_per_century: -0.288_677_94,
};

#[rustfmt::skip]
pub static URANUS: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 19.189_164_64, semi_major_axis_per_century: -0.001_961_76,
    eccentricity: 0.047_257_44,        eccentricity_per_century: -0.000_043_97,
    inclination_deg: 0.772_637_83,     inclination_per_century: -0.002_429_39,
    mean_longitude_deg: 313.238_104_51,
    mean_motion_deg_per_day: 428.482_027_85 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 170.954_276_30, perihelion_per_century: 0.408_052_81,
    node_longitude_deg: 74.016_925_03,        node_per_century: 0.042_405_89,
};

#[rustfmt::skip]
pub static NEPTUNE: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 30.069_922_76, semi_major_axis_per_century: 0.000_262_91,
    eccentricity: 0.008_590_48,        eccentricity_per_century: 0.000_051_05,
    inclination_deg: 1.770_043_47,     inclination_per_century: 0.000_353_72,
    mean_longitude_deg: -55.120_029_69,
    mean_motion_deg_per_day: 218.459_453_25 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 44.964_762_27, perihelion_per_century: -0.322_414_64,
    node_longitude_deg: 131.784_225_74,      node_per_century: -0.005_086_64,
};

#[rustfmt::skip]
pub static PLUTO: OrbitalElements = OrbitalElements {
    semi_major_axis_au: 39.482_116_75, semi_major_axis_per_century: -0.000_315_96,
    eccentricity: 0.248_827_30,        eccentricity_per_century: 0.000_051_70,
    inclination_deg: 17.140_012_06,    inclination_per_century: 0.000_048_18,
    mean_longitude_deg: 238.929_038_33,
    mean_motion_deg_per_day: 145.207_805_15 / DAYS_PER_CENTURY,
    perihelion_longitude_deg: 224.068_916_29, perihelion_per_century: -0.040_629_42,
    node_longitude_deg: 110.303_936_84,       node_per_century: -0.011_834_82,
};

//                         a       e       i       L         n/day          ϖ         Ω
#[rustfmt::skip]
pub static CHIRON: OrbitalElements =
    OrbitalElements::fixed(13.648, 0.3791, 6.935,  216.13,   0.019_547_920, 188.63,   209.38);
#[rustfmt::skip]
pub static CERES: OrbitalElements =
    OrbitalElements::fixed(2.7663, 0.0780, 10.583, 160.2165, 0.214_217_605, 154.4165, 80.4928);
#[rustfmt::skip]
pub static PALLAS: OrbitalElements =
    OrbitalElements::fixed(2.7724, 0.2296, 34.85,  116.53,   0.213_510_992, 123.33,   173.18);
#[rustfmt::skip]
pub static JUNO: OrbitalElements =
    OrbitalElements::fixed(2.6680, 0.2579, 12.97,  297.08,   0.226_164_968, 57.98,    170.13);
#[rustfmt::skip]
pub static VESTA: OrbitalElements =
    OrbitalElements::fixed(2.3615, 0.0889, 7.134,  233.85,   0.271_595_237, 253.75,   103.91);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_mean_anomaly_at_epoch() {
        let el = EARTH.at(0.0);
        assert!((el.mean_anomaly_deg() - -2.473_110_27).abs() < 1e-8);
    }

    #[test]
    fn mean_motion_matches_orbital_period() {
        // One sidereal orbit of the Earth ≈ 365.256 days.
        let period = 360.0 / EARTH.mean_motion_deg_per_day;
        assert!((period - 365.256).abs() < 0.01, "period = {period}");
    }

    #[test]
    fn drift_applies_per_century() {
        let el = MERCURY.at(DAYS_PER_CENTURY);
        assert!((el.node_longitude_deg - (48.330_765_93 - 0.125_340_81)).abs() < 1e-12);
        assert!((el.mean_longitude_deg - (252.250_323_50 + 149_472.674_111_75)).abs() < 1e-6);
    }

    #[test]
    fn small_bodies_obey_keplers_third_law() {
        for el in [&CHIRON, &CERES, &PALLAS, &JUNO, &VESTA] {
            let n = 0.985_607_668_6 / el.semi_major_axis_au.powf(1.5);
            assert!((el.mean_motion_deg_per_day - n).abs() < 1e-6);
        }
    }
}
