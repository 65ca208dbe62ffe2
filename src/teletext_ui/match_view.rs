// src/teletext_ui/match_view.rs - Header and tabs of a match editing session

use super::colors::*;
use super::formatting::{pad_left, pad_right, paint, paint_on};
use crate::data_fetcher::models::PlayerStat;
use crate::error::MISSING_EVIDENCE_MESSAGE;
use crate::match_editor::{MatchEditor, Side, Tab, non_blank_urls};

/// Display columns of every rendered line
pub const PAGE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 24;

/// Short markers for a player's cards and injury
fn markers(stat: &PlayerStat) -> Vec<&'static str> {
    let mut markers = Vec::new();
    if stat.second_yellow {
        markers.push("2A");
    }
    if stat.red_card {
        markers.push("RD");
    }
    if stat.injury {
        markers.push("LES");
    }
    markers
}

fn painted_markers(stat: &PlayerStat, colored: bool) -> String {
    markers(stat)
        .into_iter()
        .map(|marker| match marker {
            "LES" => paint(marker, injury_fg(), 201, colored),
            _ => paint(marker, expulsion_fg(), 196, colored),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-line scoreboard: match id and status, then teams and score
pub fn render_header(editor: &MatchEditor, colored: bool) -> String {
    let state = editor.state();
    let title = format!(" ENCUENTRO {}", editor.match_id());
    let status = format!("{} ", state.status_label());
    let title_line = format!(
        "{}{}",
        pad_right(&title, PAGE_WIDTH - status.chars().count()),
        status
    );

    let (local, visitor) = editor.score();
    let score = format!(" {local} - {visitor} ");
    let side_width = (PAGE_WIDTH - score.chars().count()) / 2;

    format!(
        "{}\n{}{}{}\n",
        paint_on(&title_line, header_fg(), header_bg(), colored),
        paint(
            &pad_right(&editor.team(Side::Local).name, side_width),
            local_fg(),
            51,
            colored
        ),
        paint(&score, result_fg(), 46, colored),
        paint(
            &pad_left(&editor.team(Side::Visitor).name, side_width),
            visitor_fg(),
            51,
            colored
        ),
    )
}

fn render_tab_bar(active: Tab, colored: bool) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                paint(&format!("[{}]", tab.title()), subheader_fg(), 46, colored)
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_roster(editor: &MatchEditor, side: Side, colored: bool) -> String {
    let mut out = String::new();

    let suspensions = editor.suspensions(side);
    if !suspensions.is_empty() {
        out.push_str(&paint("SUSPENDIDOS Y LESIONADOS", subheader_fg(), 46, colored));
        out.push('\n');
        for suspension in suspensions {
            let tag = pad_right(suspension.tag(), 5);
            let tag = if suspension.injury {
                paint(&tag, injury_fg(), 201, colored)
            } else {
                paint(&tag, expulsion_fg(), 196, colored)
            };
            out.push_str(&format!("  {tag}{}\n", suspension.player_name));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Autogoles del rival: {}\n\n",
        editor.state().own_goals(side.opponent())
    ));

    let stats = editor.stats(side);
    if stats.is_empty() {
        out.push_str("  Sin jugadores registrados\n");
        return out;
    }

    out.push_str(&paint(
        &format!(
            "  {}{}  EVENTOS",
            pad_right("JUGADOR", NAME_WIDTH),
            pad_left("G", 3)
        ),
        subheader_fg(),
        46,
        colored,
    ));
    out.push('\n');
    for stat in stats {
        let goals = pad_left(&stat.goals.to_string(), 3);
        let goals = if stat.goals > 0 {
            paint(&goals, goal_fg(), 226, colored)
        } else {
            goals
        };
        let line = format!(
            "  {}{}  {}",
            paint(&pad_right(&stat.player_name, NAME_WIDTH), text_fg(), 231, colored),
            goals,
            painted_markers(stat, colored)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn render_side_events(editor: &MatchEditor, side: Side, colored: bool) -> String {
    let mut out = format!(
        "{}\n",
        paint(
            &editor.team(side).name.to_uppercase(),
            subheader_fg(),
            46,
            colored
        )
    );

    let mut any = false;
    for stat in editor.stats(side).iter().filter(|stat| stat.has_event()) {
        any = true;
        let mut parts = Vec::new();
        if stat.goals > 0 {
            parts.push(paint(&format!("{} gol(es)", stat.goals), goal_fg(), 226, colored));
        }
        let marks = painted_markers(stat, colored);
        if !marks.is_empty() {
            parts.push(marks);
        }
        out.push_str(&format!(
            "  {}{}\n",
            pad_right(&stat.player_name, NAME_WIDTH),
            parts.join(" ")
        ));
    }

    let own_goals_for = editor.state().own_goals(side.opponent());
    if own_goals_for > 0 {
        any = true;
        out.push_str(&format!("  Autogoles a favor: {own_goals_for}\n"));
    }

    if !any {
        out.push_str("  Sin incidencias\n");
    }
    out
}

fn render_summary(editor: &MatchEditor, colored: bool) -> String {
    let (local, visitor) = editor.score();
    let mut out = format!(
        "{} {}\n\n",
        paint("MARCADOR", subheader_fg(), 46, colored),
        paint(&format!("{local} - {visitor}"), result_fg(), 46, colored)
    );

    out.push_str(&render_side_events(editor, Side::Local, colored));
    out.push('\n');
    out.push_str(&render_side_events(editor, Side::Visitor, colored));
    out.push('\n');

    out.push_str(&paint("IMÁGENES DEL RESULTADO", subheader_fg(), 46, colored));
    out.push('\n');
    let urls = non_blank_urls(editor.image_urls());
    if urls.is_empty() {
        out.push_str("  (sin imágenes)\n");
    }
    for (index, url) in urls.iter().enumerate() {
        out.push_str(&format!("  {}. {url}\n", index + 1));
    }
    out.push('\n');

    let hint = if editor.is_closed() {
        "Encuentro cerrado. Solo un administrador puede revertir el resultado.".to_string()
    } else if urls.is_empty() {
        MISSING_EVIDENCE_MESSAGE.to_string()
    } else {
        format!(
            "Listo para cerrar: --close {} --result <ARCHIVO>",
            editor.match_id()
        )
    };
    out.push_str(&paint(&hint, hint_fg(), 226, colored));
    out.push('\n');
    out
}

/// Tab bar followed by the body of `tab`
pub fn render_tab(editor: &MatchEditor, tab: Tab, colored: bool) -> String {
    let body = match tab.side() {
        Some(side) => render_roster(editor, side, colored),
        None => render_summary(editor, colored),
    };
    format!("{}\n\n{}", render_tab_bar(tab, colored), body)
}

/// Header plus every tab, starting from the editor's current one
pub fn render_match(editor: &MatchEditor, colored: bool) -> String {
    let start = Tab::ALL
        .iter()
        .position(|tab| *tab == editor.tab())
        .unwrap_or(0);
    let mut out = render_header(editor, colored);
    for tab in Tab::ALL.iter().cycle().skip(start).take(Tab::ALL.len()) {
        out.push('\n');
        out.push_str(&render_tab(editor, *tab, colored));
    }
    out
}
