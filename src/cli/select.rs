// ABOUTME: CLI commands that change selections: select, clear and reset

use anyhow::{anyhow, Context, Result};
use tracing::info;

use super::{ClearArgs, ClearTarget, SelectArgs};
use avatar_wizard::catalog::{AvatarCatalog, Category};
use avatar_wizard::config::{AppConfig, CompletionRecord};
use avatar_wizard::flow::SelectionReadiness;
use avatar_wizard::store::SelectionStore;

/// Store to modify; a corrupt file is treated as empty and overwritten on save
fn load_store(config: &AppConfig) -> Result<SelectionStore> {
    SelectionStore::load_or_empty(config.selections_path()?)
        .context("Failed to load avatar selections")
}

/// Apply a catalog selection to the store. Returns the chosen display name.
pub fn apply_selection(
    store: &mut SelectionStore,
    catalog: &AvatarCatalog,
    category: Category,
    key: &str,
) -> Result<String> {
    let not_found = || anyhow!("No {} matching '{}' in the catalog", category.label(), key);

    match category {
        Category::Church => {
            let avatar = catalog.find_church(key).ok_or_else(not_found)?;
            store.select_church_avatar(avatar.clone());
            Ok(avatar.display_name().to_string())
        }
        Category::Community => {
            let avatar = catalog.find_community(key).ok_or_else(not_found)?;
            store.select_community_avatar(avatar.clone());
            Ok(avatar.display_name().to_string())
        }
        Category::Companion => {
            let companion = catalog.find_companion(key).ok_or_else(not_found)?;
            if !store.select_companion(companion.clone()) {
                info!("Companion '{}' was already selected", companion.companion);
            }
            Ok(companion.companion.clone())
        }
    }
}

pub fn execute_select(config: &AppConfig, args: SelectArgs) -> Result<()> {
    let catalog = AvatarCatalog::load(config.catalog_path())?;
    let mut store = load_store(config)?;
    let category = Category::from(args.category);

    let name = apply_selection(&mut store, &catalog, category, &args.key)?;
    store.save()?;

    let readiness = SelectionReadiness::read(&store);
    println!("✅ {} set to {}", category.label(), name);
    println!("   {}/3 selections made", readiness.selected_count());
    if readiness.all() {
        println!("   All avatars chosen. Run the wizard to continue.");
    }
    Ok(())
}

pub fn execute_clear(config: &AppConfig, args: ClearArgs) -> Result<()> {
    let mut store = match args.target {
        // Nothing to keep, so the old file is never read
        ClearTarget::All => SelectionStore::empty(config.selections_path()?),
        _ => load_store(config)?,
    };
    match args.target {
        ClearTarget::Church => store.clear_church_avatar(),
        ClearTarget::Community => store.clear_community_avatar(),
        ClearTarget::Companion => store.clear_companion(),
        ClearTarget::All => store.clear_all(),
    }
    store.save()?;
    println!("🧹 Selections cleared");
    Ok(())
}

pub fn execute_reset(config: &AppConfig) -> Result<()> {
    SelectionStore::empty(config.selections_path()?).save()?;

    let mut record = CompletionRecord::load()?;
    record.reset();
    record.save()?;

    println!("🔄 Wizard reset. All selections removed.");
    Ok(())
}
