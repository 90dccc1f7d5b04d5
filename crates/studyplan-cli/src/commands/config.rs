use clap::Subcommand;
use studyplan_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init,
}

pub fn run(action: ConfigAction) -> super::CliResult {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
        }
        ConfigAction::Init => {
            Config::default().save()?;
            println!("wrote {}", Config::config_path().display());
        }
    }
    Ok(())
}
