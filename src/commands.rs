use crate::cli::Args;
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use fuchiboli_admin::config::Config;
use fuchiboli_admin::config::user_prompts::{
    prompt_for_api_domain, prompt_for_confirmation, prompt_for_password,
};
use fuchiboli_admin::constants::{CLOSE_SUCCESS_MESSAGE, DEFAULT_DEVICE};
use fuchiboli_admin::data_fetcher::ApiClient;
use fuchiboli_admin::error::AppError;
use fuchiboli_admin::match_editor::{MatchEditor, SubmitOutcome, Tab};
use fuchiboli_admin::result_sheet::ResultSheet;
use fuchiboli_admin::teletext_ui::{
    render_match, render_matches, render_rounds, render_tab, render_teams,
};
use std::io::stdout;
use std::path::Path;
use tracing::info;

const TERMINAL_TITLE: &str = "FUCHIBOLI ADMIN";

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    version::print_logo();
    version::print_version_info();
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    version::print_logo();
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.trim().is_empty() {
            prompt_for_api_domain().await?
        } else {
            new_domain.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Ruta de log personalizada eliminada. Se usará la ubicación por defecto.");
    }

    config.validate()?;
    config.save().await?;
    println!("¡Configuración actualizada!");
    Ok(())
}

/// Handles --logout. Succeeds even when no session was stored.
pub async fn handle_logout_command() -> Result<(), AppError> {
    let path = Config::get_config_path();
    if !Path::new(&path).exists() {
        println!("No hay una sesión guardada.");
        return Ok(());
    }

    let mut config = Config::load_from_path(&path).await?;
    if config.session.take().is_some() {
        config.save().await?;
        info!("Stored session removed");
        println!("Sesión cerrada.");
    } else {
        println!("No hay una sesión guardada.");
    }
    Ok(())
}

/// Handles --login: asks for the password, logs in and stores the session.
pub async fn handle_login_command(mut config: Config, usuario: &str) -> Result<(), AppError> {
    let password = prompt_for_password(usuario).await?;
    let dispositivo = config
        .session
        .as_ref()
        .map(|session| session.dispositivo.clone())
        .unwrap_or_else(|| DEFAULT_DEVICE.to_string());

    let api = ApiClient::new(config.api_domain.clone(), config.http_timeout_seconds, None)?;
    let data = api.login(usuario, &password, &dispositivo).await?;

    config.session = Some(data.session(&dispositivo));
    config.save().await?;

    if !data.usuario.administrador {
        println!("Aviso: el usuario no tiene permisos de administrador.");
    }
    println!(
        "Sesión iniciada como {}. Temporada activa: {} (id {}).",
        data.usuario.nombre_usuario, data.temporada.descripcion, data.temporada.id
    );
    Ok(())
}

pub async fn handle_teams_command(api: &ApiClient, colored: bool) -> Result<(), AppError> {
    let teams = api.fetch_teams().await?;
    print!("{}", render_teams(&teams, colored));
    Ok(())
}

pub async fn handle_rounds_command(
    api: &ApiClient,
    season_id: i64,
    tournament_id: i64,
    colored: bool,
) -> Result<(), AppError> {
    let rounds = api.fetch_rounds(season_id, tournament_id).await?;
    print!("{}", render_rounds(&rounds, colored));
    Ok(())
}

pub async fn handle_round_command(
    api: &ApiClient,
    round_id: i64,
    colored: bool,
) -> Result<(), AppError> {
    let matches = api.fetch_round_matches(round_id).await?;
    print!("{}", render_matches(&matches, colored));
    Ok(())
}

/// Lists a team's pending (`played == false`) or played matches
pub async fn handle_team_matches_command(
    api: &ApiClient,
    season_id: i64,
    tournament_id: i64,
    team_id: i64,
    played: bool,
    colored: bool,
) -> Result<(), AppError> {
    let matches = if played {
        api.fetch_played_matches(season_id, tournament_id, team_id)
            .await?
    } else {
        api.fetch_pending_matches(season_id, tournament_id, team_id)
            .await?
    };
    print!("{}", render_matches(&matches, colored));
    Ok(())
}

/// Handles --match: prints the scoreboard and every tab once.
pub async fn handle_match_command(
    api: &ApiClient,
    match_id: i64,
    colored: bool,
) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(format!("{TERMINAL_TITLE} - {match_id}")))?;
    let editor = MatchEditor::new(api.load_match_info(match_id).await?);
    print!("{}", render_match(&editor, colored));
    Ok(())
}

/// Handles --close: replays the result sheet, shows the summary, asks for
/// confirmation unless `--yes` was given and sends the result once.
pub async fn handle_close_command(
    api: &ApiClient,
    match_id: i64,
    sheet_path: &Path,
    assume_yes: bool,
    colored: bool,
) -> Result<(), AppError> {
    let sheet = ResultSheet::load(sheet_path).await?;
    let mut editor = MatchEditor::new(api.load_match_info(match_id).await?);
    sheet.apply(&mut editor)?;

    editor.set_tab(Tab::Summary);
    print!("{}", render_tab(&editor, Tab::Summary, colored));
    println!();

    let outcome = editor
        .submit(api, |prompt| async move {
            if assume_yes {
                info!("Confirmation skipped with --yes");
                Ok(true)
            } else {
                prompt_for_confirmation(prompt).await
            }
        })
        .await?;

    match outcome {
        SubmitOutcome::Saved => println!("{CLOSE_SUCCESS_MESSAGE}"),
        SubmitOutcome::Cancelled => println!("Operación cancelada. No se envió nada."),
    }
    Ok(())
}
