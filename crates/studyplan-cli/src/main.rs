use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyplan-cli", version, about = "Studyplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task recommendations
    Recommend {
        #[command(subcommand)]
        action: commands::recommend::RecommendAction,
    },
    /// Daily and weekly routine generation
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Task catalog inspection
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Recommend { action } => commands::recommend::run(action),
        Commands::Routine { action } => commands::routine::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
