//! Unit tests for vn-model.

#[cfg(test)]
mod density {
    use crate::{coverage_area, estimate_density};

    #[test]
    fn one_neighbor_radius_two() {
        let d = estimate_density(1, 2.0);
        assert!((d - 0.0796).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn zero_count_is_zero() {
        for r in [0.5, 1.0, 2.5, 100.0] {
            assert_eq!(estimate_density(0, r), 0.0);
        }
    }

    #[test]
    fn degenerate_radius_is_zero() {
        assert_eq!(estimate_density(5, 0.0), 0.0);
        assert_eq!(estimate_density(5, -1.0), 0.0);
        assert_eq!(estimate_density(5, f64::NAN), 0.0);
        assert_eq!(coverage_area(0.0), 0.0);
    }

    #[test]
    fn never_negative() {
        for count in 0..20 {
            for r in [-3.0, 0.0, 0.1, 1.0, 7.5] {
                assert!(estimate_density(count, r) >= 0.0);
            }
        }
    }
}

#[cfg(test)]
mod range {
    use crate::{RangePolicy, adapt_range};

    #[test]
    fn linear_shrink_endpoints() {
        let p = RangePolicy::LinearShrink;
        assert_eq!(adapt_range(p, 0.0, 2.5).radius, 2.5);
        assert_eq!(adapt_range(p, 1.0, 2.5).radius, 0.0);
        assert!((adapt_range(p, 0.25, 2.0).radius - 1.5).abs() < 1e-12);
    }

    #[test]
    fn linear_shrink_clamps_above_unit_density() {
        let p = RangePolicy::LinearShrink;
        for density in [1.0001, 1.5, 3.0, 1e6] {
            assert_eq!(p.adjust(density, 2.5), 0.0);
        }
    }

    #[test]
    fn adjustment_keeps_density() {
        let adj = adapt_range(RangePolicy::LinearShrink, 0.4, 10.0);
        assert_eq!(adj.density, 0.4);
        assert!((adj.radius - 6.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_scale_proportional() {
        let p = RangePolicy::NormalizedScale { max_density: 0.5 };
        assert_eq!(p.adjust(0.0, 10.0), 0.0);
        assert!((p.adjust(0.25, 10.0) - 5.0).abs() < 1e-12);
        assert!((p.adjust(0.5, 10.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_scale_not_clamped_above_base() {
        // Density beyond max_density grows the range past the base.
        let p = RangePolicy::NormalizedScale { max_density: 0.5 };
        let r = p.adjust(1.0, 10.0);
        assert!((r - 20.0).abs() < 1e-12);
        assert!(r > 10.0);
    }

    #[test]
    fn normalized_scale_clamped_below() {
        let p = RangePolicy::NormalizedScale { max_density: 0.5 };
        assert_eq!(p.adjust(-0.1, 10.0), 0.0);
    }

    #[test]
    fn validation() {
        assert!(RangePolicy::LinearShrink.validate().is_ok());
        assert!(RangePolicy::NormalizedScale { max_density: 0.5 }.validate().is_ok());
        assert!(RangePolicy::NormalizedScale { max_density: 0.0 }.validate().is_err());
        assert!(RangePolicy::NormalizedScale { max_density: f64::NAN }.validate().is_err());
        // Unvalidated bad policy still yields a defined range.
        assert_eq!(RangePolicy::NormalizedScale { max_density: 0.0 }.adjust(1.0, 5.0), 0.0);
    }
}

#[cfg(test)]
mod exposure {
    use std::collections::BTreeSet;

    use vn_core::{SimRng, UniformSource, VehicleId};

    use crate::{ExposureModel, mark_exposed};

    /// Replays a fixed list of draws, cycling.
    struct Scripted {
        draws: Vec<f64>,
        next:  usize,
        taken: usize,
    }

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self { draws: draws.to_vec(), next: 0, taken: 0 }
        }
    }

    impl UniformSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            let v = self.draws[self.next % self.draws.len()];
            self.next += 1;
            self.taken += 1;
            v
        }
    }

    fn ids(n: usize) -> BTreeSet<VehicleId> {
        (0..n).map(|i| VehicleId::new(format!("v{i:02}"))).collect()
    }

    #[test]
    fn probability_zero_never_exposes() {
        let mut src = Scripted::new(&[0.0]);
        assert!(mark_exposed(&ids(10), 0.0, &mut src).is_empty());
    }

    #[test]
    fn probability_one_always_exposes() {
        let mut src = Scripted::new(&[0.999_999_999]);
        let all = ids(10);
        assert_eq!(mark_exposed(&all, 1.0, &mut src), all);
    }

    #[test]
    fn draw_below_p_exposes_in_id_order() {
        // v00 → 0.1 (exposed), v01 → 0.5 (not), v02 → 0.29 (exposed)
        let mut src = Scripted::new(&[0.1, 0.5, 0.29]);
        let exposed = mark_exposed(&ids(3), 0.3, &mut src);
        let expect: BTreeSet<_> = ["v00", "v02"].into_iter().map(VehicleId::from).collect();
        assert_eq!(exposed, expect);
    }

    #[test]
    fn one_draw_per_neighbor_regardless_of_p() {
        for p in [0.0, 0.4, 1.0] {
            let mut src = Scripted::new(&[0.5]);
            mark_exposed(&ids(7), p, &mut src);
            assert_eq!(src.taken, 7);
        }
    }

    #[test]
    fn out_of_range_probability_clamped() {
        let mut src = Scripted::new(&[0.0, 0.99]);
        assert!(mark_exposed(&ids(4), -0.5, &mut src).is_empty());
        assert_eq!(mark_exposed(&ids(4), 7.0, &mut src).len(), 4);
        assert!(mark_exposed(&ids(4), f64::NAN, &mut src).is_empty());
    }

    #[test]
    fn seeded_source_reproducible() {
        let all = ids(50);
        let a = mark_exposed(&all, 0.3, &mut SimRng::new(5));
        let b = mark_exposed(&all, 0.3, &mut SimRng::new(5));
        assert_eq!(a, b);
        assert!(a.is_subset(&all));
    }

    #[test]
    fn exposure_rate_near_probability() {
        let all = ids(100);
        let mut rng = SimRng::new(2024);
        let trials = 200;
        let total: usize = (0..trials).map(|_| mark_exposed(&all, 0.2, &mut rng).len()).sum();
        let rate = total as f64 / (trials * all.len()) as f64;
        assert!((rate - 0.2).abs() < 0.02, "rate {rate}");
    }

    #[test]
    fn model_validates_probability() {
        assert!(ExposureModel::new(0.7).is_ok());
        assert!(ExposureModel::new(1.2).is_err());
        assert!(ExposureModel::new(f64::NAN).is_err());
        let m = ExposureModel::new(1.0).unwrap();
        assert_eq!(m.probability(), 1.0);
        assert_eq!(m.mark(&ids(3), &mut SimRng::new(0)).len(), 3);
    }
}

#[cfg(test)]
mod throughput {
    use crate::{PopulationBase, ThroughputStrategy, aggregate_efficiency, estimate_throughput};

    const POP: ThroughputStrategy = ThroughputStrategy::PopulationNormalized { base: PopulationBase::InRange };

    #[test]
    fn time_normalized() {
        let s = ThroughputStrategy::TimeNormalized { capacity: 20.0 };
        assert!((estimate_throughput(s, 4, 8) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn time_normalized_may_go_negative() {
        // exposed > capacity is a modelling looseness, reported unclamped.
        let s = ThroughputStrategy::TimeNormalized { capacity: 10.0 };
        assert!((s.estimate(14, 2) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn population_normalized() {
        assert!((estimate_throughput(POP, 3, 12) - 0.75).abs() < 1e-12);
        assert_eq!(POP.estimate(0, 5), 1.0);
        assert_eq!(POP.estimate(5, 5), 0.0);
    }

    #[test]
    fn zero_base_is_zero() {
        assert_eq!(POP.estimate(0, 0), 0.0);
        assert_eq!(ThroughputStrategy::default().estimate(3, 0), 0.0);
        assert_eq!(aggregate_efficiency(0, 0), 0.0);
    }

    #[test]
    fn aggregate_efficiency_matches_population_formula() {
        assert!((aggregate_efficiency(40, 28) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn default_is_time_normalized_capacity_twenty() {
        assert_eq!(ThroughputStrategy::default(), ThroughputStrategy::TimeNormalized { capacity: 20.0 });
        assert!(ThroughputStrategy::TimeNormalized { capacity: f64::INFINITY }.validate().is_err());
        assert!(POP.validate().is_ok());
    }
}
