use clap::Subcommand;
use studyplan_core::Config;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all catalog tasks
    List,
    /// Show one task by id
    Show {
        /// Task id (e.g. "cs-001")
        id: String,
    },
}

pub fn run(action: CatalogAction) -> super::CliResult {
    let config = Config::load_or_default();
    let catalog = super::load_catalog(&config)?;

    match action {
        CatalogAction::List => {
            println!("{}", serde_json::to_string_pretty(catalog.tasks())?);
        }
        CatalogAction::Show { id } => match catalog.get(&id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => return Err(format!("task not found: {id}").into()),
        },
    }
    Ok(())
}
