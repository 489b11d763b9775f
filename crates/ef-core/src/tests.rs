//! Unit tests for ef-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, StationId, TableId};

    #[test]
    fn index_casts_inner() {
        assert_eq!(AgentId(42).index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(TableId(0) < TableId(1));
        assert!(StationId(9) > StationId(3));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, ZoneKey};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn finite_check() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn zone_buckets_use_floor() {
        assert_eq!(ZoneKey::containing(Point::new(4.9, 0.0), 5.0), ZoneKey::new(0, 0));
        assert_eq!(ZoneKey::containing(Point::new(5.0, 12.5), 5.0), ZoneKey::new(1, 2));
        // negative coordinates must not share bucket 0 with positives
        assert_eq!(ZoneKey::containing(Point::new(-0.5, -5.0), 5.0), ZoneKey::new(-1, -1));
    }

    #[test]
    fn zone_origin() {
        assert_eq!(ZoneKey::new(2, -1).origin(5.0), Point::new(10.0, -5.0));
    }

    #[test]
    fn zone_display() {
        assert_eq!(ZoneKey::new(3, -2).to_string(), "3_-2");
    }
}

#[cfg(test)]
mod config {
    use crate::FlowConfig;

    #[test]
    fn defaults_match_model_constants() {
        let cfg = FlowConfig::default();
        assert_eq!(cfg.sample_cap, 50);
        assert_eq!(cfg.step_speed, 0.5);
        assert_eq!(cfg.zone_size, 5.0);
        assert_eq!(cfg.congestion_threshold, 0.3);
        assert_eq!(cfg.max_congestion_zones, 5);
        assert_eq!(cfg.default_buffet_length_ft, 20.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_seed_keeps_defaults() {
        let cfg = FlowConfig::with_seed(7);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.sample_cap, 50);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = FlowConfig { step_speed: 0.0, ..FlowConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FlowConfig { zone_size: -5.0, ..FlowConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FlowConfig { sample_cap: 0, ..FlowConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = FlowConfig { congestion_threshold: 1.5, ..FlowConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_overrides_subset() {
        let cfg = FlowConfig::from_json_str(r#"{ "seed": 9, "sample_cap": 20 }"#).unwrap();
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.sample_cap, 20);
        assert_eq!(cfg.step_speed, 0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_invalid_values_rejected() {
        assert!(FlowConfig::from_json_str(r#"{ "zone_size": 0.0 }"#).is_err());
        assert!(FlowConfig::from_json_str("not json").is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn agent_rng_derives_from_run_seed() {
        let run = SimRng::new(99);
        let mut a = run.agent(AgentId(3));
        let mut b = AgentRng::new(99, AgentId(3));
        for _ in 0..20 {
            assert_eq!(a.choose_index(1000), b.choose_index(1000));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<Option<usize>> = (0..8).map(|_| r0.choose_index(1 << 30)).collect();
        let b: Vec<Option<usize>> = (0..8).map(|_| r1.choose_index(1 << 30)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn choose_index_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(rng.choose_index(0), None);
        assert_eq!(rng.choose_index(1), Some(0));
        for _ in 0..1000 {
            let i = rng.choose_index(4).unwrap();
            assert!(i < 4);
        }
    }
}
