use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bloomtime", version, about = "BloomTime study timer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Active timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Points, level, streak and daily goal
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Badge catalog
    Badge {
        #[command(subcommand)]
        action: commands::badge::BadgeAction,
    },
    /// Points-gated cosmetic unlocks
    Unlock {
        #[command(subcommand)]
        action: commands::unlock::UnlockAction,
    },
    /// End-of-day reflections
    Reflect {
        #[command(subcommand)]
        action: commands::reflect::ReflectAction,
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
        Commands::Task { action } => commands::task::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Badge { action } => commands::badge::run(action),
        Commands::Unlock { action } => commands::unlock::run(action),
        Commands::Reflect { action } => commands::reflect::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
