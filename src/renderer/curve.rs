//! Closed-curve smoothing
//!
//! Turns an ordered, cyclic point ring into a smooth closed cubic curve that
//! passes through every sample with continuous tangents. Independent of the
//! simulation; any ring of at least three finite points works.

use glam::Vec2;

/// Local interpolation tension. Control points sit at `tension/3` of the
/// neighbor chord, which keeps the curve snug against the samples.
pub const TENSION: f32 = 0.4;

/// One cubic segment ending at `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

/// A closed smooth curve: `start`, then one cubic segment per ring point
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    pub start: Vec2,
    pub segments: Vec<CurveSegment>,
}

/// Smooth a cyclic ring into a closed cubic curve.
///
/// Each segment's control points derive from the four local samples
/// (previous, current, next, next-next). Returns `None` for degenerate
/// input (fewer than three points, or any non-finite coordinate) so a bad
/// frame is skipped rather than drawn corrupt.
pub fn smooth_closed(ring: &[Vec2]) -> Option<ClosedCurve> {
    if ring.len() < 3 {
        return None;
    }
    if ring.iter().any(|p| !p.is_finite()) {
        return None;
    }

    let n = ring.len();
    let segments = (0..n)
        .map(|i| {
            let p0 = ring[(i + n - 1) % n];
            let p1 = ring[i];
            let p2 = ring[(i + 1) % n];
            let p3 = ring[(i + 2) % n];
            CurveSegment {
                c1: p1 + (p2 - p0) * (TENSION / 3.0),
                c2: p2 - (p3 - p1) * (TENSION / 3.0),
                to: p2,
            }
        })
        .collect();

    Some(ClosedCurve {
        start: ring[0],
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_one_segment_per_point_and_closed() {
        let curve = smooth_closed(&square()).unwrap();
        assert_eq!(curve.segments.len(), 4);
        assert_eq!(curve.start, Vec2::new(0.0, 0.0));
        // The last segment lands back on the start point
        assert_eq!(curve.segments.last().unwrap().to, curve.start);
    }

    #[test]
    fn test_passes_through_every_sample() {
        let ring = square();
        let curve = smooth_closed(&ring).unwrap();
        // Segment i ends exactly at ring point i+1 (cyclic)
        for (i, seg) in curve.segments.iter().enumerate() {
            assert_eq!(seg.to, ring[(i + 1) % ring.len()]);
        }
    }

    #[test]
    fn test_control_points_follow_neighbor_chords() {
        let ring = square();
        let curve = smooth_closed(&ring).unwrap();
        let seg = &curve.segments[0];
        // c1 leaves p1 along the p0→p2 chord
        let expected = ring[0] + (ring[1] - ring[3]) * (TENSION / 3.0);
        assert_eq!(seg.c1, expected);
    }

    #[test]
    fn test_degenerate_rings_rejected() {
        assert!(smooth_closed(&[]).is_none());
        assert!(smooth_closed(&square()[..2]).is_none());

        let mut bad = square();
        bad[2].x = f32::NAN;
        assert!(smooth_closed(&bad).is_none());

        let mut inf = square();
        inf[1].y = f32::INFINITY;
        assert!(smooth_closed(&inf).is_none());
    }

    #[test]
    fn test_triangle_minimum() {
        let tri = [
            Vec2::new(0.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(4.0, 6.0),
        ];
        let curve = smooth_closed(&tri).unwrap();
        assert_eq!(curve.segments.len(), 3);
    }
}
