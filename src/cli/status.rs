// ABOUTME: CLI status command
// Reports selections, the step a resumed wizard would open on, and completion (text/JSON output)

use anyhow::{Context, Result};
use serde::Serialize;

use super::OutputFormat;
use avatar_wizard::config::{AppConfig, CompletionRecord};
use avatar_wizard::flow::{FlowState, RecordingNavigator, SelectionReadiness, StepFlowController};
use avatar_wizard::store::SelectionStore;

/// JSON output structure for status command
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub flow: FlowState,
    pub progress: u8,
    pub readiness: SelectionReadiness,
    pub church_avatar: Option<String>,
    pub community_avatar: Option<String>,
    pub companion: Option<String>,
    pub completed_at: Option<String>,
    /// Whether launching the TUI would walk the wizard again
    pub needs_wizard: bool,
    pub next_screen: String,
}

pub fn build_status(config: &AppConfig, store: SelectionStore, record: &CompletionRecord) -> StatusOutput {
    let church_avatar = store.church_avatar().map(|a| a.display_name().to_string());
    let community_avatar = store.community_avatar().map(|a| a.display_name().to_string());
    let companion = store.companion().map(|c| c.companion.clone());

    let controller = StepFlowController::resume(store, RecordingNavigator::new());

    StatusOutput {
        flow: controller.state(),
        progress: controller.step_progress(),
        readiness: controller.readiness_snapshot(),
        church_avatar,
        community_avatar,
        companion,
        completed_at: record.completed_at.clone().filter(|_| record.completed),
        needs_wizard: record.needs_wizard(),
        next_screen: config.next_screen().to_string(),
    }
}

pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let store = SelectionStore::load_from(config.selections_path()?)
        .context("Failed to load avatar selections")?;
    let record = CompletionRecord::load()?;
    let status = build_status(config, store, &record);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Text => {
            let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "none".to_string());
            println!("Church avatar:    {}", show(&status.church_avatar));
            println!("Community avatar: {}", show(&status.community_avatar));
            println!("Companion:        {}", show(&status.companion));
            println!();
            println!(
                "Wizard step:      {} ({}%)",
                status.flow.current_step, status.progress
            );
            println!(
                "Selected:         {}/3",
                status.readiness.selected_count()
            );
            match &status.completed_at {
                Some(at) => println!("Completed:        {at} → {}", status.next_screen),
                None => println!("Completed:        no"),
            }
            if status.completed_at.is_some() && status.needs_wizard {
                println!("                  (recorded by an older version, run the wizard again)");
            }
        }
    }

    Ok(())
}
