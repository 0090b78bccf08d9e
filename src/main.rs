//! Command line utility for choosing Legendary game configurations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legendary_chooser::catalog::SetRegistry;
use legendary_chooser::rules::default_data_dir;
use legendary_chooser::search::generate;
use legendary_chooser::sets;

#[derive(Parser)]
#[command(name = "legendary-chooser", version)]
#[command(about = "Choose valid Legendary game setups from the sets you own")]
struct Cli {
    /// Increase verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every valid game configuration for the included sets
    Generate {
        /// A Legendary set to draw cards from. Repeatable.
        #[arg(short = 's', long = "include-set", required = true, value_parser = parse_set_name)]
        include_sets: Vec<String>,

        /// Number of players to size the configuration for
        #[arg(short = 'c', long, default_value_t = 1)]
        player_count: u32,

        /// Enforce the mastermind always-leads villain rule
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        always_leads: bool,

        /// Directory holding the rules files. Defaults to the user data dir.
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn parse_set_name(value: &str) -> Result<String, String> {
    let name = value.to_lowercase();
    if sets::lookup(&name).is_none() {
        return Err(format!(
            "'{value}' is not an available Legendary set for configuration"
        ));
    }
    Ok(name)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Generate {
            include_sets,
            player_count,
            always_leads,
            data_dir,
        } => {
            let data_dir = data_dir.unwrap_or_else(default_data_dir);

            let mut registry = SetRegistry::new();
            let mut included = Vec::new();
            for name in &include_sets {
                if registry.lookup(name).is_some() {
                    continue;
                }
                // lookup validated the name at parse time
                let Some(definition) = sets::lookup(name) else {
                    continue;
                };
                match sets::register(&mut registry, definition, &data_dir) {
                    Ok(id) => included.push(id),
                    Err(err) => {
                        tracing::error!("failed to load rules for set '{name}': {err}");
                        std::process::exit(1);
                    }
                }
            }

            match generate(&registry, &included, player_count, always_leads) {
                Ok(configs) => {
                    for config in &configs {
                        println!("{}", config.render(&registry));
                    }
                    println!(
                        "{} valid configuration(s) for {} player(s)",
                        configs.len(),
                        player_count
                    );
                }
                Err(err) => {
                    tracing::error!("configuration generation failed: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}
