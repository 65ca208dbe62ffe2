//! User interaction and prompts
//!
//! Prompts used during first-time setup, login and before the irreversible
//! close of a match.

use crate::error::AppError;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::IsTerminal;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

async fn read_trimmed_line() -> Result<String, AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Prompts the user for the API domain and returns the trimmed input.
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Introduce el dominio de la API: ");
    read_trimmed_line().await
}

/// Reads a line in raw mode without echoing it. Ctrl+C aborts.
fn read_hidden_line() -> std::io::Result<String> {
    enable_raw_mode()?;
    let mut input = String::new();
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter => break Ok(()),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    break Err(std::io::Error::new(
                        std::io::ErrorKind::Interrupted,
                        "Entrada cancelada",
                    ));
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            },
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };
    disable_raw_mode()?;
    println!();
    result.map(|()| input)
}

/// Prompts for the password of `usuario`.
///
/// On a terminal the input is not echoed; piped input is read as a line.
pub async fn prompt_for_password(usuario: &str) -> Result<String, AppError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(format!("Contraseña para {usuario}: ").as_bytes())
        .await?;
    stdout.flush().await?;

    if !std::io::stdin().is_terminal() {
        return read_trimmed_line().await;
    }
    let password = tokio::task::spawn_blocking(read_hidden_line)
        .await
        .map_err(|e| AppError::config_error(format!("Password prompt failed: {e}")))??;
    Ok(password)
}

/// Shows `message` and waits for an explicit yes.
///
/// Anything other than `s`, `si`, `sí`, `y` or `yes` (case-insensitive) counts
/// as a refusal, including an empty line.
pub async fn prompt_for_confirmation(message: &str) -> Result<bool, AppError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(format!("{message} [s/N] ").as_bytes())
        .await?;
    stdout.flush().await?;
    let answer = read_trimmed_line().await?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
