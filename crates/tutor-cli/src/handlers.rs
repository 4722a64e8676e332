//! Command handlers: run workshop operations and render their results.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use tutor_core::{
    display::{
        CreateResult, DeleteResult, LinkReport, OperationStatus, RunSummaries, Steps, UpdateResult,
    },
    params::{ApplyEdit, CreateTutorial, ImportTutorial, UpdateStep},
    Placement, Workshop,
};

use crate::{
    cli::{
        ApplyArgs, ExportArgs, ImportArgs, NewTutorialArgs, StepCommands, TutorialCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    workshop: Workshop,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(workshop: Workshop, renderer: TerminalRenderer) -> Self {
        Self { workshop, renderer }
    }

    pub async fn handle_tutorial_command(self, command: TutorialCommands) -> Result<()> {
        match command {
            TutorialCommands::New(args) => self.new_tutorial(args).await,
            TutorialCommands::List => self.list_tutorials().await,
            TutorialCommands::Show(args) => {
                let steps = self
                    .workshop
                    .tutorial_steps(&args.slug)
                    .await
                    .context("Failed to load tutorial")?;
                self.renderer.render(&Steps(steps).to_string())
            }
            TutorialCommands::Import(args) => self.import_tutorial(args).await,
            TutorialCommands::Export(args) => self.export_tutorial(args).await,
            TutorialCommands::Rename(args) => {
                let summary = self
                    .workshop
                    .rename_tutorial(&args.into())
                    .await
                    .context("Failed to rename tutorial")?;
                let result = UpdateResult::with_changes(
                    summary,
                    vec!["Renamed every step of the tutorial".to_string()],
                );
                self.renderer.render(&result.to_string())
            }
            TutorialCommands::Check => self.check_links().await,
        }
    }

    pub async fn handle_step_command(self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Show(args) => {
                let step = self
                    .workshop
                    .show_step(&args.slug)
                    .await
                    .context("Failed to show step")?;
                self.renderer.render(&step.to_string())
            }
            StepCommands::AddBefore(args) => {
                let step = self
                    .workshop
                    .insert_step(&args.into_params(Placement::Before))
                    .await
                    .context("Failed to add step")?;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            StepCommands::AddAfter(args) => {
                let step = self
                    .workshop
                    .insert_step(&args.into_params(Placement::After))
                    .await
                    .context("Failed to add step")?;
                self.renderer.render(&CreateResult::new(step).to_string())
            }
            StepCommands::Delete(args) => {
                let deleted = self
                    .workshop
                    .delete_step(&args.slug)
                    .await
                    .context("Failed to delete step")?;
                let result = DeleteResult::new(deleted.removed, deleted.focus);
                self.renderer.render(&result.to_string())
            }
            StepCommands::Update(args) => {
                let params: UpdateStep = args.into();
                let changes = describe_changes(&params);
                let step = self
                    .workshop
                    .update_step(&params)
                    .await
                    .context("Failed to update step")?;
                self.renderer
                    .render(&UpdateResult::with_changes(step, changes).to_string())
            }
            StepCommands::Apply(args) => self.apply_edit(args).await,
            StepCommands::Document(args) => {
                let document = self
                    .workshop
                    .initial_document(&args.slug)
                    .await
                    .context("Failed to load document")?;
                println!("{}", serde_json::to_string_pretty(&document)?);
                Ok(())
            }
        }
    }

    pub async fn list_tutorials(&self) -> Result<()> {
        let summaries = self
            .workshop
            .list_tutorials()
            .await
            .context("Failed to list tutorials")?;
        self.renderer.render(&RunSummaries(summaries).to_string())
    }

    async fn new_tutorial(&self, args: NewTutorialArgs) -> Result<()> {
        if !args.yes && !confirm(&format!("Create a new tutorial named '{}'?", args.name))? {
            self.renderer
                .render(&OperationStatus::failure("Tutorial creation cancelled").to_string())?;
            return Ok(());
        }

        let params: CreateTutorial = args.into();
        let head = self
            .workshop
            .create_tutorial(&params)
            .await
            .context("Failed to create tutorial")?;
        info!("Created tutorial starting at {}", head.slug);
        self.renderer.render(&CreateResult::new(head).to_string())
    }

    async fn import_tutorial(&self, args: ImportArgs) -> Result<()> {
        let text = tokio::fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        debug!("Read {} bytes from {}", text.len(), args.file.display());

        let summary = self
            .workshop
            .import_tutorial(&ImportTutorial { text })
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        self.renderer.render(&CreateResult::new(summary).to_string())
    }

    async fn export_tutorial(&self, args: ExportArgs) -> Result<()> {
        let text = self
            .workshop
            .export_tutorial(&args.slug)
            .await
            .context("Failed to export tutorial")?;

        match args.output {
            Some(path) => {
                tokio::fs::write(&path, text)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let status =
                    OperationStatus::success(format!("Exported tutorial to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            // Raw text, so the output can be redirected straight into a file
            None => {
                print!("{text}");
                Ok(())
            }
        }
    }

    async fn apply_edit(&self, args: ApplyArgs) -> Result<()> {
        let raw = tokio::fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let document = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", args.file.display()))?;

        let step = self
            .workshop
            .apply_edit(&ApplyEdit {
                slug: args.slug,
                document,
            })
            .await
            .context("Failed to apply editor change")?;
        let result =
            UpdateResult::with_changes(step, vec!["Stored rich content from the editor".into()]);
        self.renderer.render(&result.to_string())
    }

    async fn check_links(&self) -> Result<()> {
        let report = LinkReport(
            self.workshop
                .check_links()
                .await
                .context("Failed to check links")?,
        );
        self.renderer.render(&report.to_string())?;
        if !report.is_clean() {
            bail!("The library has broken tutorial links");
        }
        Ok(())
    }
}

/// Lists the edits an update will make, for the confirmation output.
fn describe_changes(params: &UpdateStep) -> Vec<String> {
    let mut changes = Vec::new();
    if params.title.is_some() {
        changes.push("Updated title".to_string());
    }
    if params.content.is_some() {
        changes.push("Replaced content".to_string());
    }
    if params.hint.is_some() {
        changes.push("Set hint".to_string());
    }
    if params.clear_hint {
        changes.push("Removed hint".to_string());
    }
    changes
}

/// Asks a yes/no question on the terminal. End of input counts as no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
