// src/main.rs
mod cli;
mod commands;
mod logging;
mod version;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_only};
use fuchiboli_admin::config::Config;
use fuchiboli_admin::constants::CLOSE_FAILURE_MESSAGE;
use fuchiboli_admin::data_fetcher::ApiClient;
use fuchiboli_admin::error::AppError;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Read the stored config without prompting, only to find the log path.
    let stored_log_path = Config::load_from_path(&Config::get_config_path())
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let _guard = match logging::setup_logging(&args, stored_log_path.as_ref()).await {
        Ok((log_file_path, guard)) => {
            info!(
                "{} {} started, logging to {}",
                fuchiboli_admin::NAME,
                fuchiboli_admin::VERSION,
                log_file_path
            );
            Some(guard)
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if let Err(e) = run(&args).await {
        if e.is_user_facing() {
            info!("Command rejected: {}", e);
        } else {
            error!("Command failed: {}", e);
        }

        if args.close.is_some() && !e.is_user_facing() {
            eprintln!("{CLOSE_FAILURE_MESSAGE}: {}", e.user_message());
        } else {
            eprintln!("{}", e.user_message());
        }
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    if args.version {
        return commands::handle_version_command();
    }

    if is_config_only(args) {
        if args.new_api_domain.is_some()
            || args.new_log_file_path.is_some()
            || args.clear_log_file_path
        {
            commands::handle_config_update_command(args).await?;
        }
        if args.logout {
            commands::handle_logout_command().await?;
        }
        if args.list_config {
            commands::handle_list_config_command().await?;
        }
        return Ok(());
    }

    let config = Config::load().await?;

    if let Some(usuario) = &args.login {
        return commands::handle_login_command(config, usuario).await;
    }

    let api = ApiClient::from_config(&config)?;
    let colored = !args.plain;

    if let (Some(match_id), Some(sheet)) = (args.close, &args.result) {
        return commands::handle_close_command(&api, match_id, sheet, args.yes, colored).await;
    }

    if let Some(match_id) = args.match_id {
        return commands::handle_match_command(&api, match_id, colored).await;
    }

    if args.teams {
        return commands::handle_teams_command(&api, colored).await;
    }

    if let Some(round_id) = args.round {
        return commands::handle_round_command(&api, round_id, colored).await;
    }

    if let (Some(season), Some(tournament)) = (args.season, args.tournament) {
        if args.rounds {
            return commands::handle_rounds_command(&api, season, tournament, colored).await;
        }
        if let Some(team) = args.pending {
            return commands::handle_team_matches_command(
                &api, season, tournament, team, false, colored,
            )
            .await;
        }
        if let Some(team) = args.played {
            return commands::handle_team_matches_command(
                &api, season, tournament, team, true, colored,
            )
            .await;
        }
    }

    Args::command().print_help()?;
    Ok(())
}
