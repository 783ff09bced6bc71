use sample_elim::common::points::min_spacing;
use sample_elim::elimination::radius::default_maximum_distance;
use sample_elim::elimination::tiling::tile_points;
use sample_elim::elimination::weights::limit_fraction;
use sample_elim::geom3::candidates::{sample_jittered_grid, sample_uniform};
use sample_elim::{
    Aabb3, EliminationError, EliminationParams, Point3, Vector3, eliminate, eliminate_with,
};
use std::collections::HashSet;
use test_case::test_case;

const BETA: f64 = 0.65;
const GAMMA: f64 = 1.5;

fn unit_box() -> Aabb3 {
    Aabb3::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}

fn unit_extent() -> Vector3 {
    Vector3::new(1.0, 1.0, 1.0)
}

fn as_bits(points: &[Point3]) -> Vec<[u64; 3]> {
    points
        .iter()
        .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect()
}

#[test_case(500, 1)]
#[test_case(500, 7)]
#[test_case(500, 100)]
#[test_case(500, 499)]
#[test_case(64, 63)]
fn output_has_requested_length(input: usize, output: usize) {
    let points = sample_uniform(input, &unit_box(), 1);
    let samples = eliminate(&points, output, 0.2, &unit_extent()).unwrap();
    assert_eq!(samples.len(), output);
}

#[test]
fn output_points_are_distinct_input_points() {
    let points = sample_uniform(600, &unit_box(), 2);
    let samples = eliminate(&points, 150, 0.15, &unit_extent()).unwrap();

    let inputs = as_bits(&points).into_iter().collect::<HashSet<_>>();
    let outputs = as_bits(&samples);
    assert!(outputs.iter().all(|p| inputs.contains(p)));
    assert_eq!(outputs.iter().collect::<HashSet<_>>().len(), samples.len());
}

#[test]
fn full_size_is_a_no_op() {
    let points = sample_uniform(50, &unit_box(), 3);
    for d in [0.01, 0.5, 3.0] {
        let same = eliminate(&points, points.len(), d, &unit_extent()).unwrap();
        assert_eq!(as_bits(&same), as_bits(&points));
    }
    let same = eliminate(&points, points.len(), 0.1, &Vector3::zeros()).unwrap();
    assert_eq!(as_bits(&same), as_bits(&points));
}

#[test]
fn random_cube_scenario() {
    let points = sample_uniform(1000, &unit_box(), 4);
    let samples = eliminate(&points, 100, 0.1, &unit_extent()).unwrap();
    assert_eq!(samples.len(), 100);

    let limit = 0.1 * limit_fraction(1000, 100, BETA, GAMMA);
    assert!(min_spacing(&samples).unwrap() >= limit);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let points = sample_uniform(1000, &unit_box(), 5);
    let a = eliminate(&points, 100, 0.1, &unit_extent()).unwrap();
    let b = eliminate(&points, 100, 0.1, &unit_extent()).unwrap();
    assert_eq!(as_bits(&a), as_bits(&b));

    let sequential = EliminationParams {
        parallel: false,
        ..Default::default()
    };
    let c = eliminate_with(&points, 100, 0.1, &unit_extent(), &sequential).unwrap();
    assert_eq!(as_bits(&a), as_bits(&c));
}

#[test]
fn jittered_grid_respects_minimum_distance() {
    let points = sample_jittered_grid(&unit_box(), 0.05, 0.1, 6);
    assert_eq!(points.len(), 8000);

    let samples = eliminate(&points, 500, 0.1, &unit_extent()).unwrap();
    let limit = 0.1 * limit_fraction(8000, 500, BETA, GAMMA);
    assert!(min_spacing(&samples).unwrap() >= limit);
}

#[test]
fn flat_domain_is_supported() {
    let aabb = Aabb3::new(Point3::origin(), Point3::new(1.0, 1.0, 0.0));
    let points = sample_jittered_grid(&aabb, 0.02, 0.3, 7);
    let extent = aabb.extents();
    let d = default_maximum_distance(100, &extent).unwrap();

    let samples = eliminate(&points, 100, d, &extent).unwrap();
    assert_eq!(samples.len(), 100);
    assert!(samples.iter().all(|p| p.z == 0.0));

    let limit = d * limit_fraction(points.len(), 100, BETA, GAMMA);
    assert!(min_spacing(&samples).unwrap() >= limit);
}

#[test]
fn progressive_prefixes_keep_their_spacing() {
    let points = sample_uniform(1000, &unit_box(), 8);
    let samples = eliminate(&points, 100, 0.1, &unit_extent()).unwrap();

    // Each halving level widens the distance by sqrt(2) and eliminates from `size` to `size / 2`
    let mut size = samples.len();
    let mut distance = 0.1;
    while size / 2 >= 6 {
        distance *= std::f64::consts::SQRT_2;
        let half = size / 2;
        let limit = distance * limit_fraction(size, half, BETA, GAMMA);
        let spacing = min_spacing(&samples[..half]).unwrap();
        assert!(
            spacing >= limit,
            "prefix of {} has spacing {} below {}",
            half,
            spacing,
            limit
        );
        size = half;
    }
}

#[test]
fn progressive_order_is_a_permutation_of_the_plain_result() {
    let points = sample_uniform(800, &unit_box(), 9);
    let plain = EliminationParams {
        progressive: false,
        ..Default::default()
    };
    let a = eliminate_with(&points, 120, 0.12, &unit_extent(), &plain).unwrap();
    let b = eliminate(&points, 120, 0.12, &unit_extent()).unwrap();

    let a = as_bits(&a).into_iter().collect::<HashSet<_>>();
    let b = as_bits(&b).into_iter().collect::<HashSet<_>>();
    assert_eq!(a, b);
}

#[test]
fn tiling_mirrors_boundary_point() {
    let points = vec![Point3::new(0.0, 0.25, 0.75)];
    let tiled = tile_points(&points, 0.5, &unit_extent()).unwrap();
    assert!(tiled.points.contains(&Point3::new(1.0, 0.25, 0.75)));
    assert!(tiled.origins.iter().all(|&o| o == 0));
}

#[test]
fn tiling_reduces_boundary_bias() {
    // Without tiling the points near the faces look isolated and are kept preferentially
    let points = sample_uniform(2000, &unit_box(), 10);
    let untiled = EliminationParams {
        tiling: false,
        ..Default::default()
    };
    let count_near_faces = |samples: &[Point3]| {
        samples
            .iter()
            .filter(|p| (0..3).any(|d| p[d] < 0.05 || p[d] > 0.95))
            .count()
    };

    let tiled = eliminate(&points, 200, 0.15, &unit_extent()).unwrap();
    let flat = eliminate_with(&points, 200, 0.15, &unit_extent(), &untiled).unwrap();
    assert!(count_near_faces(&flat) > count_near_faces(&tiled));
}

#[test]
fn invalid_arguments_are_reported() {
    let points = sample_uniform(10, &unit_box(), 11);
    let err = eliminate(&points, 0, 0.1, &unit_extent()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<EliminationError>(),
        Some(&EliminationError::ZeroOutputSize)
    );

    let err = eliminate(&points, 5, -0.1, &unit_extent()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EliminationError>(),
        Some(EliminationError::InvalidMaximumDistance(_))
    ));
}
