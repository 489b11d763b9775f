//! Unit tests for ef-planner.

use ef_core::FlowConfig;

use crate::EventPlanner;

const HALL_REQUEST: &str = r#"{
    "layout": {
        "tables":  [{ "x": 10, "y": 10 }],
        "buffets": [{ "x": 50, "y": 50, "lengthFt": 40 }],
        "entry":   { "x": 0,   "y": 0 },
        "exit":    { "x": 100, "y": 100 },
        "venueSqFt": 2000
    },
    "guestCount": 100,
    "duration": 3
}"#;

fn planner() -> EventPlanner {
    EventPlanner::new(FlowConfig::with_seed(42)).unwrap()
}

fn with_field(field: &str, value: serde_json::Value) -> String {
    let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
    req[field] = value;
    req.to_string()
}

#[cfg(test)]
mod parsing {
    use serde_json::json;

    use super::*;
    use crate::{PlannerError, parse_request};

    #[test]
    fn valid_request_parses() {
        let req = parse_request(HALL_REQUEST).unwrap();
        assert_eq!(req.guest_count, 100);
        assert_eq!(req.duration_hours, 3.0);
        assert_eq!(req.layout.tables.len(), 1);
    }

    #[test]
    fn missing_fields_named_in_order() {
        let err = parse_request(r#"{ "guestCount": 100 }"#).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: layout");

        let err = parse_request(&with_field("guestCount", json!(null))).unwrap_err();
        assert!(matches!(err, PlannerError::MissingField("guestCount")));

        let err = parse_request(&with_field("duration", json!(null))).unwrap_err();
        assert!(matches!(err, PlannerError::MissingField("duration")));
    }

    #[test]
    fn guest_count_range() {
        for bad in [json!(9), json!(501), json!(50.5), json!(-10)] {
            let err = parse_request(&with_field("guestCount", bad)).unwrap_err();
            assert_eq!(err.to_string(), "Guest count must be between 10 and 500");
        }
        for good in [json!(10), json!(500)] {
            assert!(parse_request(&with_field("guestCount", good)).is_ok());
        }
    }

    #[test]
    fn duration_range() {
        for bad in [json!(0.5), json!(8.01)] {
            let err = parse_request(&with_field("duration", bad)).unwrap_err();
            assert_eq!(err.to_string(), "Duration must be between 1 and 8 hours");
        }
        assert!(parse_request(&with_field("duration", json!(1))).is_ok());
        assert!(parse_request(&with_field("duration", json!(8))).is_ok());
        assert!(parse_request(&with_field("duration", json!(2.5))).is_ok());
    }

    #[test]
    fn guest_range_reported_before_duration() {
        let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
        req["guestCount"] = json!(1000);
        req["duration"] = json!(20);
        let err = parse_request(&req.to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Guest count must be between 10 and 500");
    }

    #[test]
    fn malformed_body() {
        let err = parse_request("{ not json").unwrap_err();
        assert!(matches!(err, PlannerError::Malformed(_)));
        assert_eq!(err.status(), 400);

        let err = parse_request(&with_field("guestCount", json!("many"))).unwrap_err();
        assert!(matches!(err, PlannerError::Malformed(_)));
    }
}

#[cfg(test)]
mod planning {
    use serde_json::json;

    use super::*;
    use crate::{PlannerError, parse_request};
    use ef_advisor::Confidence;
    use ef_core::SimRng;
    use ef_sim::NoopObserver;

    #[test]
    fn banquet_scenario() {
        let response = planner().plan(&parse_request(HALL_REQUEST).unwrap()).unwrap();

        assert!(response.success);
        assert_eq!(response.metrics.peak_diners, 50);
        assert_eq!(response.metrics.service_capacity, 20);
        assert_eq!(response.metrics.max_queue_length, 30);
        assert_eq!(response.metrics.sample_size, 50);
        assert_eq!(response.metrics.congestion_zones, response.congestion_zones.len());
        assert!(response.congestion_zones.len() <= 5);

        let wait: f64 = response.metrics.avg_wait_time.parse().unwrap();
        assert!((2.0..3.0).contains(&wait));
        assert_eq!(response.metrics.avg_wait_time.len(), 3);

        // wait below 3 minutes → efficient staffing
        assert_eq!(response.recommendations.staff.ratio, 50);
        assert_eq!(response.recommendations.staff.count, 2);
        assert_eq!(response.recommendations.buffet.recommended_length_ft, 40.0);
        assert_eq!(response.recommendations.plates.total, 118);
        assert_eq!(response.recommendations.plates.confidence, Confidence::High);
    }

    #[test]
    fn hotspots_sorted_busiest_first() {
        let response = planner().plan(&parse_request(HALL_REQUEST).unwrap()).unwrap();
        let severities: Vec<f64> = response.congestion_zones.iter().map(|z| z.severity).collect();
        let mut sorted = severities.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(severities, sorted);
    }

    #[test]
    fn same_seed_same_response() {
        let req = parse_request(HALL_REQUEST).unwrap();
        assert_eq!(planner().plan(&req).unwrap(), planner().plan(&req).unwrap());
    }

    #[test]
    fn empty_tables_rejected_with_layout_message() {
        let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
        req["layout"]["tables"] = json!([]);
        let payload = planner().handle_json(&req.to_string()).unwrap_err();
        assert_eq!(payload.error, "Layout must include at least one table");
        assert_eq!(payload.status, 400);
    }

    #[test]
    fn missing_buffets_rejected() {
        let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
        req["layout"].as_object_mut().unwrap().remove("buffets");
        let payload = planner().handle_json(&req.to_string()).unwrap_err();
        assert_eq!(payload.error, "Layout must include at least one buffet station");
    }

    #[test]
    fn distant_exit_still_plans() {
        let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
        req["layout"]["exit"] = json!({ "x": 600000, "y": 0 });
        req["guestCount"] = json!(10);
        let response = planner().handle_json(&req.to_string()).unwrap();
        assert!(response.success);
        assert_eq!(response.metrics.sample_size, 10);
    }

    #[test]
    fn coordinates_beyond_step_resolution_are_internal_failure() {
        let mut req: serde_json::Value = serde_json::from_str(HALL_REQUEST).unwrap();
        req["layout"]["entry"] = json!({ "x": 1e17, "y": 0 });
        let payload = planner().handle_json(&req.to_string()).unwrap_err();
        assert_eq!(payload.error, "Simulation failed");
        assert_eq!(payload.status, 500);
    }

    #[test]
    fn invalid_layout_leaves_rng_untouched() {
        let mut req = parse_request(HALL_REQUEST).unwrap();
        req.layout.buffets.clear();

        let mut rng = SimRng::new(11);
        let err = planner().plan_with(&req, &mut rng, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidLayout(_)));

        let mut fresh = SimRng::new(11);
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }
}

#[cfg(test)]
mod wire {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn success_body_shape() {
        let (status, body) = planner().respond_json(HALL_REQUEST);
        assert_eq!(status, 200);

        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["success"], json!(true));
        assert!(v["congestionZones"].is_array());
        assert!(v["metrics"]["avgWaitTime"].is_string());
        assert_eq!(v["metrics"]["peakDiners"], json!(50));
        assert_eq!(v["metrics"]["serviceCapacity"], json!(20));
        assert!(v["metrics"]["congestionZones"].is_u64());
        assert_eq!(v["recommendations"]["plates"]["buffer"], json!(18));
        assert_eq!(v["recommendations"]["plates"]["confidence"], json!("High"));
        assert!(v["recommendations"]["staff"]["reason"].is_string());
        assert!(v["recommendations"]["buffet"]["recommendedLengthFt"].is_number());

        if let Some(zone) = v["congestionZones"].as_array().and_then(|z| z.first()) {
            assert!(zone["percentTraffic"].is_u64());
            assert!(zone.get("visits").is_none());
        }
    }

    #[test]
    fn error_body_shape() {
        let (status, body) = planner().respond_json(r#"{ "layout": null }"#);
        assert_eq!(status, 400);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v, json!({ "error": "Missing required field: layout" }));
    }
}
