#[cfg(test)]
mod model_tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use crate::models::{Platform, RunSummary, StepRecord, TutorialMeta};

    fn create_test_meta() -> TutorialMeta {
        TutorialMeta {
            name: "Test Tutorial".to_string(),
            author: "Test Author".to_string(),
            icon: "image-test".to_string(),
        }
    }

    fn create_test_step() -> StepRecord {
        StepRecord::new("test-tutorial-1", &create_test_meta(), "Intro", "Hello there")
    }

    #[test]
    fn test_new_step_copies_metadata() {
        let step = create_test_step();
        assert_eq!(step.id, "test-tutorial-1");
        assert_eq!(step.slug, "test-tutorial-1");
        assert_eq!(step.tutorial_name, "Test Tutorial");
        assert_eq!(step.author, "Test Author");
        assert_eq!(step.icon, "image-test");
        assert_eq!(step.meta(), create_test_meta());
        assert_eq!(step.compatibility, Platform::all());
    }

    #[test]
    fn test_optional_pairs_follow_their_flags() {
        let mut step = create_test_step();
        assert!(!step.has_hint());
        assert!(!step.has_next());
        assert!(!step.has_prev());
        assert!(step.is_run_head());

        step.hint = Some("Try again".to_string());
        step.next = Some("test-tutorial-2".to_string());
        step.prev = Some("test-tutorial-0".to_string());
        assert!(step.has_hint());
        assert!(step.has_next());
        assert!(step.has_prev());
        assert!(!step.is_run_head());
    }

    #[test]
    fn test_v2_only() {
        let mut step = create_test_step();
        assert!(!step.is_v2_only());

        step.compatibility = BTreeSet::from([Platform::MicrobitV2]);
        assert!(step.is_v2_only());

        step.compatibility = BTreeSet::from([Platform::MicrobitV1]);
        assert!(!step.is_v2_only());
    }

    #[test]
    fn test_platform_tags_round_trip_through_strings() {
        let set = Platform::parse_set("microbitV1, microbitV2").unwrap();
        assert_eq!(set, Platform::all());
        assert_eq!(Platform::join_set(&set), "microbitV1,microbitV2");
        assert!(Platform::parse_set("").unwrap().is_empty());
        assert!(Platform::parse_set("arduino").is_err());
    }

    #[test]
    fn test_step_serde_skips_absent_optionals() {
        let step = create_test_step();
        let value = serde_json::to_value(&step).unwrap();
        assert!(value.get("hint").is_none());
        assert!(value.get("next").is_none());
        assert!(value.get("rich_content").is_none());
        assert_eq!(value["compatibility"], json!(["microbitV1", "microbitV2"]));

        let back: StepRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_run_summary_from_head() {
        let mut head = create_test_step();
        head.compatibility = BTreeSet::from([Platform::MicrobitV2]);
        let summary = RunSummary::from_head(&head, 3);
        assert_eq!(summary.head_slug, "test-tutorial-1");
        assert_eq!(summary.name, "Test Tutorial");
        assert_eq!(summary.total_steps, 3);
        assert!(summary.v2_only);
    }
}
