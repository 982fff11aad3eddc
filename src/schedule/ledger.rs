use std::collections::{HashMap, HashSet};
use super::types::{Match, Player, Round};

/// Per-player game counters and the matches already used in the current
/// rotation cycle.
#[derive(Debug, Clone, Default)]
pub struct FairnessLedger {
    games_played: HashMap<String, u32>,
    history: Vec<Match>,
    rounds_generated: u32,
    last_round_players: HashSet<String>,
}

impl FairnessLedger {
    pub fn new(roster: &[Player]) -> Self {
        FairnessLedger {
            games_played: roster.iter().map(|p| (p.name.clone(), 0)).collect(),
            ..Default::default()
        }
    }

    pub fn games_played(&self, name: &str) -> u32 {
        self.games_played.get(name).copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[Match] {
        &self.history
    }

    pub fn rounds_generated(&self) -> u32 {
        self.rounds_generated
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// Marks every match of an accepted round as played and credits each of
    /// its players with one game.
    pub fn record_round(&mut self, round: &Round) {
        self.rounds_generated += 1;
        self.last_round_players.clear();
        for m in &round.matches {
            for name in m.players() {
                *self.games_played.entry(name.to_string()).or_insert(0) += 1;
                self.last_round_players.insert(name.to_string());
            }
            self.history.push(m.clone());
        }
    }

    /// How badly a player needs a game, from 0 (played every round) to 1.
    /// Anyone who sat out the last round is back at 1.
    pub fn play_priority(&self, name: &str) -> f64 {
        if self.rounds_generated == 0 || !self.last_round_players.contains(name) {
            return 1.0;
        }
        1.0 - f64::from(self.games_played(name)) / f64::from(self.rounds_generated)
    }
}
