use crate::{Triangulate, TriangulationConfig};

use super::util;

#[test]
fn france_slivers() {
    // Some vertices commented to make minimal test case
    let polygon = vec![
        [-1.189062499999949, 45.16147460937498],
        [-0.691113281249926, 45.09345703124998],
        // [-0.633984374999926, 45.04711914062497],
        // [-0.548486328124994, 45.00058593749998],
        [6.724707031250006, 44.97299804687506],
        // [6.73818359375008, 44.92138671875003],
        // [6.801074218750017, 44.883154296875034],
        // [6.88935546875004, 44.86030273437501],
        // [6.939843750000023, 44.858740234375034],
        // [6.972851562500011, 44.84501953124999],
        [6.992675781250057, 44.82729492187502],
        [-1.15288085937496, 44.764013671875006],
        // [-1.200390624999955, 44.726464843749994],
        // [-1.2203125, 44.68662109374998],
        [-1.24521484374992, 44.66669921875001],
    ];
    let indices = polygon.triangulate().expect("Triangulation failed");
    util::assert_indices_in_range(&indices, polygon.len());
}

#[test]
fn closed_ring() {
    let polygon = vec![[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]];
    let indices = polygon.triangulate().unwrap();
    assert_eq!(indices.len() / 3, 2);
    util::assert_indices_in_range(&indices, polygon.len());

    let mut reversed = polygon.clone();
    reversed.reverse();
    assert_eq!(reversed.triangulate().unwrap().len() / 3, 2);
}

#[test]
fn forced_emission_terminates() {
    let polygon = util::polygon::star();
    let config = TriangulationConfig::new().with_lap_factor(0);
    let indices = polygon.triangulate_with(&config, Vec::new()).unwrap();

    util::assert_indices_in_range(&indices, polygon.len());
    assert!(indices.len() / 3 <= polygon.len() - 2);
    assert!(!indices.is_empty());
    // Reflex corners left over are dropped rather than emitted backwards
    util::assert_counterclockwise(&polygon, &indices, true);
}

#[test]
fn lap_factor_limits_fallback_passes() {
    let short = TriangulationConfig::new().with_lap_factor(1);
    let long = TriangulationConfig::new().with_lap_factor(1_000_000);

    let mut differing = 0;
    for ring in util::random::tangled_rings(0x7a9, 30, 200) {
        let forced = ring.triangulate_with(&short, Vec::new()).unwrap();
        let repaired = ring.triangulate_with(&long, Vec::new()).unwrap();
        util::assert_indices_in_range(&forced, ring.len());
        util::assert_indices_in_range(&repaired, ring.len());
        assert!(forced.len() / 3 <= ring.len() - 2);
        if forced != repaired {
            differing += 1;
        }
    }
    // One lap without an ear is enough to give up on curing and splitting
    assert!(differing > 0);
}

#[test]
fn default_lap_factor_reaches_split() {
    let unlimited = TriangulationConfig::new().with_lap_factor(usize::MAX);
    for ring in util::random::tangled_rings(0x5b1, 10, 120) {
        let indices = ring.triangulate().unwrap();
        assert_eq!(indices, ring.triangulate_with(&unlimited, Vec::new()).unwrap());
    }
}
