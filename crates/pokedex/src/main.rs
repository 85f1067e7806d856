// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pokedex - a caching HTTP facade over PokeAPI.
//!
//! This is the binary entry point for the Pokedex server.

mod serve;

use clap::{Parser, Subcommand};

/// Pokedex - a caching HTTP facade over PokeAPI.
#[derive(Parser, Debug)]
#[command(name = "pokedex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Pokedex HTTP server.
    Serve,
    /// Print the resolved configuration and exit.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match pokedex_config::load_and_validate() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("pokedex: {err}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(err) = serve::run_serve(config).await {
                eprintln!("pokedex serve: {err}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            match toml::to_string_pretty(&config) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => {
                    eprintln!("pokedex config: failed to render: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("pokedex: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        super::Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = pokedex_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.server.port, 8080);
    }
}
