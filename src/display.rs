use std::collections::HashMap;
use crate::export::PlayerStats;
use crate::schedule::{Player, Round};

const FEMALE: char = '\u{2640}';
const MALE: char = '\u{2642}';

/// Formats a player as `<gender glyph> <name> (<colour>)`
pub fn format_player(player: Option<&Player>, name: &str) -> String {
    match player {
        Some(p) => {
            let glyph = if p.is_female() { FEMALE } else { MALE };
            format!("{} {} ({})", glyph, name, p.colour)
        }
        None => name.to_string(),
    }
}

/// Lays rows out in columns padded to the widest cell, without borders
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = format_row(headers.to_vec());
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// Renders one round as a court table followed by the players sitting out
pub fn render_round(round: &Round, roster: &[Player]) -> String {
    if round.is_empty() {
        return "No valid new matches could be generated for this round.\n".to_string();
    }

    let by_name: HashMap<&str, &Player> = roster.iter().map(|p| (p.name.as_str(), p)).collect();
    let cell = |name: &str| format_player(by_name.get(name).copied(), name);

    let rows: Vec<Vec<String>> = round
        .matches
        .iter()
        .enumerate()
        .map(|(court, m)| {
            let [p1, p2, p3, p4] = m.players();
            vec![(court + 1).to_string(), cell(p1), cell(p2), "vs".to_string(), cell(p3), cell(p4)]
        })
        .collect();

    let mut out = render_table(
        &["Court", "\u{2192} T1 Player1", "\u{2192} T1 Player2", "", "\u{2192} T2 Player1", "\u{2192} T2 Player2"],
        &rows,
    );

    let sitting_out = round.sitting_out(roster);
    if !sitting_out.is_empty() {
        out.push_str("\nPlayers sitting out this round:\n");
        out.push_str(&sitting_out.join(", "));
        out.push('\n');
    }
    out
}

/// Renders the raw per-player statistics
pub fn render_stats(stats: &[PlayerStats]) -> String {
    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.colour.clone(),
                s.gender.clone(),
                s.skill_score.to_string(),
                s.games_played.to_string(),
                format!("{:.2}", s.play_priority),
            ]
        })
        .collect();
    render_table(&["name", "colour", "gender", "skill_score", "games_played", "play_priority"], &rows)
}

/// Prints a round to stdout
pub fn print_round(round_number: usize, round: &Round, roster: &[Player]) {
    println!("\n=== Game {} ===", round_number);
    print!("{}", render_round(round, roster));
}
