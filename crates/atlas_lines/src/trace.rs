//! Tracing one body's line for one angle over the latitude grid.
//!
//! Meridian lines (MC/IC) sit at the geographic longitude where the body's
//! hour angle is 0° or 180°: `λ = α − GST` (IC: +180°).
//!
//! Horizon lines (ASC/DSC) solve the rise/set condition for the geometric
//! horizon, `cos H₀ = −tan φ · tan δ`. The body rises at hour angle −H₀
//! and sets at +H₀, so `λ_ASC = α − H₀ − GST` and `λ_DSC = α + H₀ − GST`.
//! When |tan φ · tan δ| > 1 the body is circumpolar (or never rises) at
//! that latitude; the sample is dropped and a gap opened.
//!
//! At the equator H₀ is exactly 90°, so the horizon lines cross the
//! equator a quarter turn from the meridian lines.

use atlas_frames::{EquatorialCoords, normalize_180, wrap_delta};

use crate::types::{AngleKind, GeoPoint, LinePiece};

/// Geographic longitude of upper culmination, degrees [-180, 180).
pub fn meridian_longitude_deg(ra_deg: f64, gst_deg: f64) -> f64 {
    normalize_180(ra_deg - gst_deg)
}

/// Semi-diurnal arc H₀ in degrees [0, 180], or `None` if the body never
/// crosses the horizon at `latitude_deg`.
pub fn rising_hour_angle_deg(latitude_deg: f64, dec_deg: f64) -> Option<f64> {
    let arg = -latitude_deg.to_radians().tan() * dec_deg.to_radians().tan();
    if !(-1.0..=1.0).contains(&arg) {
        return None;
    }
    Some(arg.acos().to_degrees())
}

/// Trace `angle` for a body at `eq` over `latitudes` (south to north).
pub fn trace_pieces(
    angle: AngleKind,
    eq: &EquatorialCoords,
    gst_deg: f64,
    latitudes: &[f64],
) -> Vec<LinePiece> {
    let mc = meridian_longitude_deg(eq.ra_deg, gst_deg);
    match angle {
        AngleKind::Mc => meridian(mc, latitudes),
        AngleKind::Ic => meridian(normalize_180(mc + 180.0), latitudes),
        AngleKind::Asc => horizon(mc, -1.0, eq.dec_deg, latitudes),
        AngleKind::Dsc => horizon(mc, 1.0, eq.dec_deg, latitudes),
    }
}

fn meridian(longitude_deg: f64, latitudes: &[f64]) -> Vec<LinePiece> {
    let points: Vec<GeoPoint> = latitudes
        .iter()
        .map(|&lat| GeoPoint::new(lat, longitude_deg))
        .collect();
    if points.is_empty() {
        return Vec::new();
    }
    vec![LinePiece::Segment(finish_segment(points))]
}

/// `side` is −1 for rising (ASC), +1 for setting (DSC).
fn horizon(mc_longitude_deg: f64, side: f64, dec_deg: f64, latitudes: &[f64]) -> Vec<LinePiece> {
    let mut pieces = Vec::new();
    let mut run: Vec<GeoPoint> = Vec::new();
    let mut gap: Option<(f64, f64)> = None;

    for &lat in latitudes {
        match rising_hour_angle_deg(lat, dec_deg) {
            Some(h0) => {
                if let Some((from_lat, to_lat)) = gap.take() {
                    pieces.push(LinePiece::Gap { from_lat, to_lat });
                }
                run.push(GeoPoint::new(lat, mc_longitude_deg + side * h0));
            }
            None => {
                if !run.is_empty() {
                    pieces.push(LinePiece::Segment(finish_segment(std::mem::take(&mut run))));
                }
                gap = Some(match gap {
                    Some((from_lat, _)) => (from_lat, lat),
                    None => (lat, lat),
                });
            }
        }
    }

    if !run.is_empty() {
        pieces.push(LinePiece::Segment(finish_segment(run)));
    }
    if let Some((from_lat, to_lat)) = gap {
        pieces.push(LinePiece::Gap { from_lat, to_lat });
    }
    pieces
}

/// Unwrap longitudes along the path, order by longitude (latitude breaks
/// ties) and drop repeated vertices. The result is shifted by whole turns
/// so the first vertex lies in [−180, 180).
fn finish_segment(mut points: Vec<GeoPoint>) -> Vec<GeoPoint> {
    let mut prev: Option<f64> = None;
    for p in &mut points {
        let lon = match prev {
            None => normalize_180(p.longitude_deg),
            Some(prev) => prev + wrap_delta(prev, p.longitude_deg),
        };
        p.longitude_deg = lon;
        prev = Some(lon);
    }

    points.sort_by(|a, b| {
        a.longitude_deg
            .total_cmp(&b.longitude_deg)
            .then(a.latitude_deg.total_cmp(&b.latitude_deg))
    });
    points.dedup();

    if let Some(first) = points.first().map(|p| p.longitude_deg) {
        let shift = normalize_180(first) - first;
        if shift != 0.0 {
            for p in &mut points {
                p.longitude_deg += shift;
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(ra_deg: f64, dec_deg: f64) -> EquatorialCoords {
        EquatorialCoords { ra_deg, dec_deg }
    }

    #[test]
    fn hour_angle_at_equator_is_quarter_turn() {
        for dec in [-28.0, -5.0, 0.0, 12.0, 23.4] {
            let h0 = rising_hour_angle_deg(0.0, dec).unwrap();
            assert!((h0 - 90.0).abs() < 1e-9, "dec {dec}: {h0}");
        }
    }

    #[test]
    fn circumpolar_has_no_hour_angle() {
        // δ = +30: circumpolar north of 60°, never rises south of −60°.
        assert!(rising_hour_angle_deg(61.0, 30.0).is_none());
        assert!(rising_hour_angle_deg(-61.0, 30.0).is_none());
        assert!(rising_hour_angle_deg(59.0, 30.0).is_some());
    }

    #[test]
    fn meridian_longitude_wraps() {
        assert_eq!(meridian_longitude_deg(10.0, 20.0), -10.0);
        assert_eq!(meridian_longitude_deg(350.0, 10.0), -20.0);
        assert_eq!(meridian_longitude_deg(180.0, 0.0), -180.0);
    }

    #[test]
    fn unwrap_crosses_antimeridian() {
        let pts = vec![
            GeoPoint::new(0.0, 178.0),
            GeoPoint::new(1.0, -179.0),
            GeoPoint::new(2.0, -176.0),
        ];
        let out = finish_segment(pts);
        let lons: Vec<f64> = out.iter().map(|p| p.longitude_deg).collect();
        assert_eq!(lons, vec![178.0, 181.0, 184.0]);
    }

    #[test]
    fn westward_path_starts_inside_range() {
        // Unwrapping from −178 heading west runs below −180; after sorting
        // the westmost vertex leads and the segment is shifted back.
        let pts = vec![
            GeoPoint::new(0.0, -178.0),
            GeoPoint::new(1.0, 179.0),
            GeoPoint::new(2.0, 176.0),
        ];
        let out = finish_segment(pts);
        let lons: Vec<f64> = out.iter().map(|p| p.longitude_deg).collect();
        assert_eq!(lons, vec![176.0, 179.0, 182.0]);
        assert_eq!(out[0].latitude_deg, 2.0);
    }

    #[test]
    fn traced_segments_start_inside_range() {
        let lats = crate::LineConfig::default().latitudes();
        for gst in [0.0, 95.0, 181.0, 270.0, 359.0] {
            for dec in [-23.0, -8.0, 8.0, 23.0] {
                for angle in [AngleKind::Asc, AngleKind::Dsc] {
                    for piece in trace_pieces(angle, &eq(10.0, dec), gst, &lats) {
                        if let LinePiece::Segment(points) = piece {
                            let lon = points[0].longitude_deg;
                            assert!((-180.0..180.0).contains(&lon), "{angle:?} {dec} {gst}: {lon}");
                            let ordered =
                                points.windows(2).all(|w| w[1].longitude_deg >= w[0].longitude_deg);
                            assert!(ordered);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn decreasing_path_is_reversed() {
        let pts = vec![
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(1.0, 9.0),
            GeoPoint::new(2.0, 8.0),
        ];
        let out = finish_segment(pts);
        assert_eq!(out[0], GeoPoint::new(2.0, 8.0));
        assert_eq!(out[2], GeoPoint::new(0.0, 10.0));
    }

    #[test]
    fn duplicates_dropped() {
        let pts = vec![
            GeoPoint::new(0.0, 5.0),
            GeoPoint::new(0.0, 5.0),
            GeoPoint::new(1.0, 5.0),
        ];
        assert_eq!(finish_segment(pts).len(), 2);
    }

    #[test]
    fn leading_and_trailing_gaps() {
        let lats: Vec<f64> = (-80..=80).step_by(10).map(f64::from).collect();
        // δ = +45: never rises south of −45°, circumpolar north of +45°.
        let pieces = trace_pieces(AngleKind::Asc, &eq(0.0, 45.0), 0.0, &lats);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], LinePiece::Gap { from_lat: -80.0, to_lat: -50.0 });
        assert!(matches!(pieces[1], LinePiece::Segment(ref p) if p.len() == 9));
        assert_eq!(pieces[2], LinePiece::Gap { from_lat: 50.0, to_lat: 80.0 });
    }

    #[test]
    fn empty_grid_gives_no_pieces() {
        assert!(trace_pieces(AngleKind::Mc, &eq(0.0, 0.0), 0.0, &[]).is_empty());
        assert!(trace_pieces(AngleKind::Dsc, &eq(0.0, 0.0), 0.0, &[]).is_empty());
    }
}
