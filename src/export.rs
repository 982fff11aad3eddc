use std::path::Path;

use anyhow::Context;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use crate::schedule::{FairnessLedger, Player, Round};

/// One match in the exported log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    #[serde(rename = "T1")]
    pub team1: [String; 2],
    #[serde(rename = "T2")]
    pub team2: [String; 2],
}

/// One round in the exported log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLog {
    pub matches: Vec<GameLog>,
    pub waiting: Vec<String>,
}

/// Per-player row of the statistics view and the stats CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub colour: String,
    pub gender: String,
    pub skill_score: i32,
    pub games_played: u32,
    pub play_priority: f64,
}

pub fn round_log(round: &Round, roster: &[Player]) -> RoundLog {
    let matches = round
        .matches
        .iter()
        .map(|m| {
            let [p1, p2, p3, p4] = m.players();
            GameLog {
                team1: [p1.to_string(), p2.to_string()],
                team2: [p3.to_string(), p4.to_string()],
            }
        })
        .collect();
    let waiting = round.sitting_out(roster).into_iter().map(String::from).collect();
    RoundLog { matches, waiting }
}

/// Writes every round of the session to `output_file` as pretty-printed JSON
pub fn save_match_log<P: AsRef<Path>>(output_file: P, rounds: &[Round], roster: &[Player]) -> anyhow::Result<()> {
    let output_file = output_file.as_ref();
    let entries: Vec<RoundLog> = rounds.iter().map(|r| round_log(r, roster)).collect();
    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(output_file, json)
        .with_context(|| format!("Failed to write match log '{}'", output_file.display()))?;
    log::info!("saved {} rounds to {}", rounds.len(), output_file.display());
    Ok(())
}

/// Current statistics for every roster player, neediest first
pub fn collect_stats(roster: &[Player], ledger: &FairnessLedger) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = roster
        .iter()
        .map(|p| PlayerStats {
            name: p.name.clone(),
            colour: p.colour.clone(),
            gender: p.gender.clone(),
            skill_score: p.skill_score,
            games_played: ledger.games_played(&p.name),
            play_priority: ledger.play_priority(&p.name),
        })
        .collect();
    stats.sort_by(|a, b| b.play_priority.total_cmp(&a.play_priority));
    stats
}

/// Writes player statistics as CSV with a header row
pub fn write_stats_csv<P: AsRef<Path>>(output_file: P, stats: &[PlayerStats]) -> anyhow::Result<()> {
    let output_file = output_file.as_ref();
    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_path(output_file)
        .with_context(|| format!("Failed to create stats file '{}'", output_file.display()))?;
    for row in stats {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
