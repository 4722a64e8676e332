//! Whole-tutorial operations for the Workshop.

use log::info;

use super::Workshop;
use crate::{
    error::{Result, TutorError},
    links::{self, LinkIssue},
    models::{RunSummary, StepRecord},
    params::{CreateTutorial, ImportTutorial, RenameTutorial},
    parser, serializer,
};

impl Workshop {
    /// Menu entries for every tutorial in the library.
    pub async fn list_tutorials(&self) -> Result<Vec<RunSummary>> {
        self.read(|library| Ok(links::summaries(&library.load_steps()?)))
            .await
    }

    /// Every step of the tutorial containing `slug`, in link order.
    pub async fn tutorial_steps(&self, slug: &str) -> Result<Vec<StepRecord>> {
        let slug = slug.to_string();
        self.read(move |library| {
            let steps = library.load_steps()?;
            let run = links::walk_run(&steps, &slug)?;
            Ok(run.into_iter().cloned().collect())
        })
        .await
    }

    /// Starts a new tutorial holding a single placeholder step.
    ///
    /// Returns the new step, which is the head of the tutorial.
    pub async fn create_tutorial(&self, params: &CreateTutorial) -> Result<StepRecord> {
        let meta = params.to_meta();
        self.mutate(move |steps| {
            let inserted = links::create_tutorial(steps, meta)?;
            let head = links::require(&inserted.steps, &inserted.slug)?.clone();
            info!("Created tutorial '{}'", head.tutorial_name);
            Ok((inserted.steps, head))
        })
        .await
    }

    /// Parses tutorial description text and adds the tutorial to the library.
    ///
    /// A format error or a name/slug collision rejects the whole import.
    pub async fn import_tutorial(&self, params: &ImportTutorial) -> Result<RunSummary> {
        let run = parser::parse(&params.text)?;
        let Some(head_slug) = run.first().map(|step| step.slug.clone()) else {
            return Err(TutorError::invalid_input("text")
                .with_reason("The tutorial description contains no steps"));
        };

        self.mutate(move |steps| {
            let total_steps = run.len();
            let merged = links::merge_run(steps, run)?;
            let head = links::require(&merged, &head_slug)?;
            let summary = RunSummary::from_head(head, total_steps);
            info!(
                "Imported tutorial '{}' with {total_steps} steps",
                summary.name
            );
            Ok((merged, summary))
        })
        .await
    }

    /// Writes the tutorial containing `slug` in the description format.
    pub async fn export_tutorial(&self, slug: &str) -> Result<String> {
        let slug = slug.to_string();
        self.read(move |library| serializer::serialize(&library.load_steps()?, &slug))
            .await
    }

    /// Renames the tutorial containing the given step.
    pub async fn rename_tutorial(&self, params: &RenameTutorial) -> Result<RunSummary> {
        let slug = params.slug.clone();
        let name = params.name.clone();
        self.mutate(move |steps| {
            let renamed = links::rename_run(steps, &slug, &name)?;
            let head = links::find_head(&renamed, &slug)?;
            let total_steps = links::walk_run(&renamed, &slug)?.len();
            let summary = RunSummary::from_head(head, total_steps);
            Ok((renamed, summary))
        })
        .await
    }

    /// Checks every link in the library.
    pub async fn check_links(&self) -> Result<Vec<LinkIssue>> {
        self.read(|library| Ok(links::verify_links(&library.load_steps()?)))
            .await
    }
}
