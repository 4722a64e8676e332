//! Tutorial description format serializer.
//!
//! Re-externalizes one run of the collection in the shape read by
//! [`crate::parser`]. Every property is written on a single line, so values
//! containing newlines are flattened to spaces. The format also trims every
//! line it reads, so leading and trailing whitespace of a value does not
//! survive an export and re-import.

use std::fmt::Write;

use crate::{
    error::Result,
    links,
    models::{Platform, StepRecord},
};

const INDENT: &str = "    ";

/// Writes the run containing `slug` as tutorial description text.
///
/// Output always starts at the run head, whichever member is named. Steps
/// are numbered from 1 in link order.
///
/// # Examples
///
/// ```rust
/// use tutor_core::{links, models::TutorialMeta, serializer::serialize};
///
/// let meta = TutorialMeta { name: "Blinky".into(), ..TutorialMeta::default() };
/// let created = links::create_tutorial(&[], meta).unwrap();
/// let text = serialize(&created.steps, &created.slug).unwrap();
/// assert!(text.starts_with("TutorialProperties [\n    TutorialName: Blinky;\n"));
/// ```
pub fn serialize(steps: &[StepRecord], slug: &str) -> Result<String> {
    let run = links::walk_run(steps, slug)?;
    let head = run[0];
    let mut out = String::new();

    out.push_str("TutorialProperties [\n");
    write_property(&mut out, "TutorialName", &head.tutorial_name);
    write_property(&mut out, "Icon", &head.icon);
    write_property(&mut out, "Author", &head.author);
    out.push_str("]\n");

    for (i, step) in run.iter().enumerate() {
        let _ = writeln!(out, "{} {{", i + 1);
        write_step(&mut out, head, step)?;
        out.push_str("}\n");
    }

    Ok(out)
}

fn write_step(out: &mut String, head: &StepRecord, step: &StepRecord) -> Result<()> {
    // Metadata that drifted from the head is kept as a per-step override.
    if step.tutorial_name != head.tutorial_name {
        write_property(out, "TutorialName", &step.tutorial_name);
    }
    if step.author != head.author {
        write_property(out, "Author", &step.author);
    }
    if step.icon != head.icon {
        write_property(out, "Icon", &step.icon);
    }

    write_property(out, "StepTitle", &step.step_title);
    write_property(out, "Contents", &step.content);
    if let Some(tree) = &step.rich_content {
        write_property(out, "ContentsJSON", &serde_json::to_string(tree)?);
    }
    if let Some(hint) = &step.hint {
        write_property(out, "Hint", hint);
    }
    if step.compatibility != Platform::all() {
        write_property(out, "Compatibility", &Platform::join_set(&step.compatibility));
    }
    Ok(())
}

fn write_property(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "{INDENT}{name}: {};", flatten(value));
}

/// Collapses line breaks so the value stays on one line.
fn flatten(value: &str) -> String {
    value.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        doctree::{EditSession, RICH_CONTENT_PLACEHOLDER},
        links::{insert_after, verify_links},
        models::TutorialMeta,
        parser::parse,
    };

    fn sample_run() -> Vec<StepRecord> {
        let meta = TutorialMeta {
            name: "Blinky Lights".to_string(),
            author: "Ada".to_string(),
            icon: "heart.png".to_string(),
        };
        let created = links::create_tutorial(&[], meta).unwrap();
        let second = insert_after(&created.steps, &created.slug).unwrap();
        let third = insert_after(&second.steps, &second.slug).unwrap();

        let mut steps = third.steps;
        for (step, title) in steps.iter_mut().zip(["Start", "Middle", "End"]) {
            step.step_title = title.to_string();
        }
        steps
    }

    fn pairs(steps: &[StepRecord], slug: &str) -> Vec<(String, String)> {
        links::walk_run(steps, slug)
            .unwrap()
            .into_iter()
            .map(|step| (step.step_title.clone(), step.content.clone()))
            .collect()
    }

    #[test]
    fn test_exact_output_shape() {
        let meta = TutorialMeta {
            name: "Blinky".to_string(),
            author: "Ada".to_string(),
            icon: "heart.png".to_string(),
        };
        let created = links::create_tutorial(&[], meta).unwrap();
        let text = serialize(&created.steps, &created.slug).unwrap();
        assert_eq!(
            text,
            "TutorialProperties [\n    TutorialName: Blinky;\n    Icon: heart.png;\n    Author: Ada;\n]\n\
             1 {\n    StepTitle: New tutorial step;\n    Contents: New tutorial content;\n}\n"
        );
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let steps = sample_run();
        let head = steps[0].slug.clone();
        let text = serialize(&steps, &head).unwrap();
        let parsed = parse(&text).unwrap();

        assert_eq!(pairs(&parsed, &parsed[0].slug), pairs(&steps, &head));
        assert!(verify_links(&parsed).is_empty());
        assert_eq!(parsed[0].author, "Ada");
        assert_eq!(parsed[0].icon, "heart.png");
    }

    #[test]
    fn test_starts_at_head_from_any_member() {
        let steps = sample_run();
        let tail = links::walk_run(&steps, &steps[0].slug).unwrap()[2]
            .slug
            .clone();
        assert_eq!(
            serialize(&steps, &tail).unwrap(),
            serialize(&steps, &steps[0].slug).unwrap()
        );
    }

    #[test]
    fn test_newlines_are_flattened() {
        let mut steps = sample_run();
        steps[0].content = "line one\n  line two".to_string();
        let text = serialize(&steps, &steps[0].slug.clone()).unwrap();
        assert!(text.contains("    Contents: line one line two;\n"));
        assert_eq!(parse(&text).unwrap()[0].content, "line one line two");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let mut steps = sample_run();
        steps[0].content = "  indented  ".to_string();
        let text = serialize(&steps, &steps[0].slug.clone()).unwrap();
        assert!(text.contains("    Contents: indented;\n"));
        assert_eq!(parse(&text).unwrap()[0].content, "indented");
    }

    #[test]
    fn test_rich_content_round_trip() {
        let steps = sample_run();
        let slug = steps[1].slug.clone();
        let tree = json!({"root": {"type": "root", "format": "", "children": [
            {"type": "paragraph", "children": [
                {"type": "text", "text": "bold; text", "format": 1}
            ]}
        ]}});
        let session = EditSession::open(&steps, &slug).unwrap();
        let steps = session.apply_change(&steps, tree.clone()).unwrap();

        let text = serialize(&steps, &slug).unwrap();
        assert!(text.contains("ContentsJSON: {"));
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed[1].rich_content.as_ref(), Some(&tree));
        assert_eq!(parsed[1].content, RICH_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_hint_and_compatibility_round_trip() {
        let mut steps = sample_run();
        steps[2].hint = Some("Press A".to_string());
        steps[2].compatibility = [Platform::MicrobitV2].into();
        let text = serialize(&steps, &steps[0].slug.clone()).unwrap();
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed[2].hint.as_deref(), Some("Press A"));
        assert!(parsed[2].is_v2_only());
        assert!(!parsed[0].has_hint());
    }

    #[test]
    fn test_missing_next_ends_run() {
        let mut steps = sample_run();
        steps.retain(|step| step.step_title != "Middle");
        let text = serialize(&steps, &steps[0].slug.clone()).unwrap();
        assert!(text.contains("1 {"));
        assert!(!text.contains("2 {"));
    }

    #[test]
    fn test_unknown_slug() {
        assert!(serialize(&sample_run(), "nope").is_err());
    }
}
