// rodeo-env: Child Process Environment Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Resolve | Path | Keys | Options | Configs | Version
//! ```

use std::process::ExitCode;

use rodeo_env::cli::global::GlobalOptions;
use rodeo_env::cli::{self, Command};
use rodeo_env::cmd::config::{run_configs_command, run_options_command};
use rodeo_env::cmd::env::{EnvContext, run_keys_command, run_path_command, run_resolve_command};
use rodeo_env::config::loader::ConfigLoader;
use rodeo_env::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use rodeo_env::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config) -> LogConfig {
    let global = &config.global;
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_format(global.log_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    match run_command(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(cli: &cli::Cli, config: &Config) -> rodeo_env::error::Result<()> {
    let env_context = || EnvContext::from_config(config, cli.global.failed_over);

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&build_config_loader(&cli.global)?.format_sources());
            Ok(())
        }
        Some(Command::Resolve(args)) => run_resolve_command(args, &env_context()?).await,
        Some(Command::Path(args)) => run_path_command(args, &env_context()?).await,
        Some(Command::Keys(args)) => run_keys_command(args, &env_context()?).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> rodeo_env::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> rodeo_env::error::Result<Config> {
    build_config_loader(global)?.build()
}
