use clap::{Parser, Subcommand};

mod commands;
mod notify;

#[derive(Parser)]
#[command(name = "prayerboard-cli", version, about = "Prayerboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer request management
    Prayer {
        #[command(subcommand)]
        action: commands::prayer::PrayerAction,
    },
    /// Moderation of community submissions
    Moderate {
        #[command(subcommand)]
        action: commands::moderate::ModerateAction,
    },
    /// Daily reminder management
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Admin session check
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// AI text features (sample prayers, translation)
    Ai {
        #[command(subcommand)]
        action: commands::ai::AiAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prayer { action } => commands::prayer::run(action),
        Commands::Moderate { action } => commands::moderate::run(action),
        Commands::Remind { action } => commands::remind::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Ai { action } => commands::ai::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
