// src/teletext_ui/list_views.rs - Round, match and team listings

use chrono::{DateTime, NaiveDateTime};

use super::colors::*;
use super::formatting::{pad_left, pad_right, paint, paint_on};
use super::match_view::PAGE_WIDTH;
use crate::data_fetcher::models::{Encounter, Round, Team};

fn title_bar(title: &str, colored: bool) -> String {
    paint_on(
        &pad_right(&format!(" {title}"), PAGE_WIDTH),
        header_fg(),
        header_bg(),
        colored,
    )
}

/// Formats a publication timestamp as `dd/mm/yyyy hh:mm`.
/// Values that do not parse are shown as received.
pub fn format_publication_date(raw: &str) -> String {
    const FORMAT: &str = "%d/%m/%Y %H:%M";
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|date| date.format(FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn render_rounds(rounds: &[Round], colored: bool) -> String {
    let mut out = format!("{}\n", title_bar("JORNADAS", colored));
    if rounds.is_empty() {
        out.push_str("  No hay jornadas registradas\n");
        return out;
    }

    for round in rounds {
        let label = if round.descripcion.trim().is_empty() {
            format!("Jornada {}", round.numero)
        } else {
            round.descripcion.clone()
        };
        let status = if round.cerrada {
            "CERRADA"
        } else if round.activa {
            "ACTIVA"
        } else {
            ""
        };
        let kind = if round.eliminatoria { " (eliminatoria)" } else { "" };
        let line = format!(
            "{} {}{}",
            pad_left(&round.id.to_string(), 5),
            pad_right(&format!("{label}{kind}"), 38),
            paint(status, subheader_fg(), 46, colored)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn match_status(encounter: &Encounter) -> &'static str {
    if encounter.cerrado {
        "CERRADO"
    } else if encounter.completado {
        "COMPLETADO"
    } else {
        "PENDIENTE"
    }
}

pub fn render_matches(matches: &[Encounter], colored: bool) -> String {
    let mut out = format!("{}\n", title_bar("ENCUENTROS", colored));
    if matches.is_empty() {
        out.push_str("  No hay encuentros\n");
        return out;
    }

    for encounter in matches {
        let score = if encounter.cerrado || encounter.completado {
            paint(
                &format!("{}-{}", encounter.marcador_local, encounter.marcador_visita),
                result_fg(),
                46,
                colored,
            )
        } else {
            "-".to_string()
        };
        out.push_str(&format!(
            "{} {} - {} {} {}\n",
            pad_left(&encounter.id.to_string(), 5),
            paint(&pad_right(&encounter.equipo_local.nombre, 16), local_fg(), 51, colored),
            paint(&pad_right(&encounter.equipo_visita.nombre, 16), visitor_fg(), 51, colored),
            score,
            match_status(encounter)
        ));

        let published = encounter
            .fecha_publicacion
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .map(format_publication_date);
        let publisher = encounter
            .usuario_publicacion
            .as_ref()
            .map(|user| user.nombre_usuario.as_str())
            .filter(|name| !name.is_empty());
        match (published, publisher) {
            (Some(date), Some(user)) => {
                out.push_str(&format!("      publicado {date} por {user}\n"));
            }
            (Some(date), None) => out.push_str(&format!("      publicado {date}\n")),
            _ => {}
        }
    }
    out
}

pub fn render_teams(teams: &[Team], colored: bool) -> String {
    let mut out = format!("{}\n", title_bar("EQUIPOS", colored));
    if teams.is_empty() {
        out.push_str("  No hay equipos registrados\n");
        return out;
    }

    for team in teams {
        let line = format!(
            "{} {}{} {}",
            pad_left(&team.id.to_string(), 5),
            paint(&pad_right(&team.nombre, 24), text_fg(), 231, colored),
            pad_right(&team.nombre_grupo, 12),
            pad_right(&team.nombre_estadio, 18)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{EncounterTeam, PublishingUser};

    #[test]
    fn test_publication_date_formats() {
        assert_eq!(format_publication_date("2025-03-02T18:05:00"), "02/03/2025 18:05");
        assert_eq!(
            format_publication_date("2025-03-02T18:05:00.123"),
            "02/03/2025 18:05"
        );
        assert_eq!(
            format_publication_date("2025-03-02T18:05:00-06:00"),
            "02/03/2025 18:05"
        );
        assert_eq!(format_publication_date("ayer"), "ayer");
    }

    #[test]
    fn test_render_matches() {
        let matches = vec![
            Encounter {
                id: 81,
                marcador_local: 2,
                marcador_visita: 1,
                cerrado: true,
                fecha_publicacion: Some("2025-03-02T18:05:00".to_string()),
                equipo_local: EncounterTeam {
                    nombre: "Rayados FC".to_string(),
                    ..EncounterTeam::default()
                },
                equipo_visita: EncounterTeam {
                    nombre: "Tuzos".to_string(),
                    ..EncounterTeam::default()
                },
                usuario_publicacion: Some(PublishingUser {
                    id: 9,
                    nombre_usuario: "admin".to_string(),
                }),
                ..Encounter::default()
            },
            Encounter {
                id: 82,
                ..Encounter::default()
            },
        ];

        let page = render_matches(&matches, false);
        assert!(page.contains("   81 Rayados FC"));
        assert!(page.contains("2-1 CERRADO"));
        assert!(page.contains("publicado 02/03/2025 18:05 por admin"));
        assert!(page.contains("- PENDIENTE"));
    }

    #[test]
    fn test_render_rounds_and_empty_lists() {
        let rounds = vec![Round {
            id: 5,
            numero: 5,
            activa: true,
            ..Round::default()
        }];
        let page = render_rounds(&rounds, false);
        assert!(page.contains("Jornada 5"));
        assert!(page.contains("ACTIVA"));

        assert!(render_teams(&[], false).contains("No hay equipos registrados"));
        assert!(render_matches(&[], false).contains("No hay encuentros"));
    }
}
