//! Golden Julian Day and sidereal-time values (Meeus, USNO).
//!
//! Pure-math tests (no data files needed).

use atlas_time::{
    CivilTime, J2000_JD, JulianMoment, SIDEREAL_DAY_DAYS, TimeReference, calendar_to_jd,
    gmst_deg, jd_to_calendar,
};

#[test]
fn known_julian_days() {
    let cases: [(i32, u32, f64, f64); 6] = [
        (2000, 1, 1.5, 2_451_545.0),
        (1999, 1, 1.0, 2_451_179.5),
        (1987, 6, 19.5, 2_446_966.0),
        (1988, 1, 27.0, 2_447_187.5),
        (1900, 1, 1.0, 2_415_020.5),
        (1600, 1, 1.0, 2_305_447.5),
    ];
    for (y, m, d, expected) in cases {
        let jd = calendar_to_jd(y, m, d);
        assert!((jd - expected).abs() < 1e-9, "{y}-{m}-{d}: {jd} != {expected}");
    }
}

#[test]
fn birth_scenario_julian_day() {
    // 1990-06-15 14:30 UT
    let civil = CivilTime::from_iso("1990-06-15", "14:30").unwrap();
    let m = JulianMoment::from_civil(&civil, TimeReference::Universal).unwrap();
    assert!((m.jd - 2_448_058.104_166_7).abs() < 1e-6, "jd = {}", m.jd);
}

#[test]
fn calendar_round_trip_sweep() {
    let mut jd = 2_300_000.25;
    while jd < 2_480_000.0 {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        assert!((back - jd).abs() < 1e-6, "round trip failed at {jd}");
        jd += 3_651.7;
    }
}

#[test]
fn gst_is_periodic_in_sidereal_days() {
    for &jd in &[2_440_000.5, J2000_JD, 2_448_058.104_166_7, 2_460_400.25] {
        let g0 = gmst_deg(jd);
        let g1 = gmst_deg(jd + SIDEREAL_DAY_DAYS);
        let diff = ((g1 - g0 + 540.0) % 360.0) - 180.0;
        assert!(diff.abs() < 1e-4, "GST drift {diff}° over one sidereal day at {jd}");
    }
}

#[test]
fn gst_advances_about_one_degree_per_solar_day() {
    let g0 = gmst_deg(J2000_JD);
    let g1 = gmst_deg(J2000_JD + 1.0);
    let advance = (g1 - g0).rem_euclid(360.0);
    assert!((advance - 0.985_647).abs() < 1e-4, "advance = {advance}");
}
