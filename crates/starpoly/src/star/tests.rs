use super::rand::{draw_star_polygon_replay, sample_rect, RadialCfg, ReplayToken, VertexCount};
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use ::rand::{rngs::StdRng, SeedableRng};

fn generated(seed: u64, index: u64, cfg: &RadialCfg) -> StarPolygon {
    draw_star_polygon_replay(cfg, ReplayToken { seed, index })
        .expect("draw")
        .preprocess(&StarCfg::default())
        .expect("preprocess")
}

#[test]
fn generated_vertices_are_on_boundary() {
    let cfg = RadialCfg::default();
    for index in 0..10 {
        let star = generated(7, index, &cfg);
        for &v in star.vertices() {
            assert_eq!(star.contains(v), Location::OnBoundary);
        }
    }
}

#[test]
fn nudged_edge_midpoints_pick_the_right_side() {
    let cfg = RadialCfg::default();
    for index in 0..10 {
        let star = generated(11, index, &cfg);
        for (p, q) in star.edges() {
            let edge = q - p;
            if edge.norm() < 1.0 {
                continue;
            }
            let mid = (p + q) * 0.5;
            // CCW ring: inward normal is the edge rotated by +90°.
            let inward = Vector2::new(-edge.y, edge.x).normalize();
            assert_eq!(star.contains(mid), Location::OnBoundary);
            assert_eq!(star.contains(mid + inward * 1e-3), Location::Inside);
            assert_eq!(star.contains(mid - inward * 1e-3), Location::Outside);
        }
    }
}

#[test]
fn generation_center_is_inside_and_far_points_outside() {
    let cfg = RadialCfg::default();
    for index in 0..10 {
        let star = generated(5, index, &cfg);
        assert_eq!(star.contains(cfg.center), Location::Inside);
        for &(dx, dy) in &[(301.0, 0.0), (0.0, -301.0), (-250.0, 250.0), (1e6, 1e6)] {
            let p = cfg.center + vector![dx, dy];
            assert_eq!(star.contains(p), Location::Outside);
        }
    }
}

#[test]
fn origin_strategies_agree_on_generated_polygon() {
    let cfg = RadialCfg::default();
    let poly = draw_star_polygon_replay(&cfg, ReplayToken { seed: 9, index: 1 }).unwrap();
    let by_first_three = poly.clone().preprocess(&StarCfg::default()).unwrap();
    let by_area = poly
        .clone()
        .preprocess(&StarCfg {
            origin: OriginStrategy::AreaCentroid,
            ..StarCfg::default()
        })
        .unwrap();
    let by_center = poly
        .preprocess(&StarCfg::default().with_origin(cfg.center))
        .unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..2000 {
        let p = sample_rect(&mut rng, vector![1.0, 1.0], vector![839.0, 639.0]);
        let expected = by_center.contains(p);
        assert_eq!(by_first_three.contains(p), expected);
        assert_eq!(by_area.contains(p), expected);
    }
}

#[test]
fn classify_all_matches_contains() {
    let star = generated(3, 0, &RadialCfg::default());
    let mut rng = StdRng::seed_from_u64(4);
    let pts: Vec<Point> = (0..100)
        .map(|_| sample_rect(&mut rng, vector![1.0, 1.0], vector![839.0, 639.0]))
        .collect();
    let labels = star.classify_all(&pts);
    assert_eq!(labels.len(), pts.len());
    for (p, l) in pts.iter().zip(labels) {
        assert_eq!(star.contains(*p), l);
    }
}

#[test]
fn star_polygon_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarPolygon>();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn binary_search_agrees_with_scan(
        seed in any::<u64>(),
        n in 3usize..60,
        qx in -50.0f64..900.0,
        qy in -50.0f64..700.0,
    ) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let star = generated(seed, 0, &cfg);
        let q = vector![qx, qy];
        prop_assert_eq!(star.contains(q), star.contains_scan(q));
    }

    #[test]
    fn angle_in_half_open_range(
        ox in -1e3f64..1e3, oy in -1e3f64..1e3,
        px in -1e3f64..1e3, py in -1e3f64..1e3,
    ) {
        prop_assume!(ox != px || oy != py);
        let a = angle(vector![ox, oy], vector![px, py]);
        prop_assert!((0.0..std::f64::consts::TAU).contains(&a));
    }

    #[test]
    fn orientation_swaps_under_exchange(
        px in -1e3f64..1e3, py in -1e3f64..1e3,
        qx in -1e3f64..1e3, qy in -1e3f64..1e3,
        rx in -1e3f64..1e3, ry in -1e3f64..1e3,
    ) {
        let (p, q, r) = (vector![px, py], vector![qx, qy], vector![rx, ry]);
        let tol = Tolerance::default();
        prop_assert_eq!(orientation(p, q, r, tol).reverse(), orientation(q, p, r, tol));
    }
}
