use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SessionConfig;
use crate::display::{print_round, render_stats};
use crate::export::{collect_stats, save_match_log, write_stats_csv};
use crate::parser::PlayerRecord;
use crate::schedule::{
    build_match_pool, schedule_round, skill_score, FairnessLedger, MatchLimits, MatchPool, PartnershipGenerator,
    Player, Round,
};

/// A menu choice typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GenerateRound,
    ViewStats,
    Export,
    Exit,
}

impl Command {
    /// `1`, `2` and `3` pick their menu entries; any other input, including
    /// an empty line, advances to the next round.
    pub fn parse(input: &str) -> Command {
        match input.trim() {
            "1" => Command::ViewStats,
            "2" => Command::Export,
            "3" => Command::Exit,
            _ => Command::GenerateRound,
        }
    }
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Where the session writes its files
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub match_log: PathBuf,
    pub player_stats: Option<PathBuf>,
}

/// Everything one scheduling session owns: the scored roster, the cached
/// match pool, the fairness ledger and the rounds generated so far.
pub struct Session {
    config: SessionConfig,
    roster: Vec<Player>,
    partnerships: PartnershipGenerator,
    pool: Option<MatchPool>,
    ledger: FairnessLedger,
    rounds: Vec<Round>,
    outputs: OutputPaths,
    rng: StdRng,
}

impl Session {
    /// Scores every player and sets up an empty ledger. A seed makes the
    /// whole session reproducible.
    pub fn new(config: SessionConfig, records: Vec<PlayerRecord>, outputs: OutputPaths, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let roster: Vec<Player> = records
            .into_iter()
            .map(|r| {
                let skill_score = skill_score(&config, &r.colour, &r.gender, &mut rng);
                Player { name: r.name, colour: r.colour, gender: r.gender, skill_score }
            })
            .collect();
        let ledger = FairnessLedger::new(&roster);

        Session {
            config,
            roster,
            partnerships: PartnershipGenerator::new(),
            pool: None,
            ledger,
            rounds: Vec::new(),
            outputs,
            rng,
        }
    }

    /// Number the next generated round will get
    pub fn next_round_number(&self) -> usize {
        self.rounds.len() + 1
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::GenerateRound => {
                let round = self.generate_round();
                print_round(self.rounds.len(), &round, &self.roster);
                self.write_player_stats();
            }
            Command::ViewStats => {
                println!("\nPlayer statistics after {} games:", self.ledger.rounds_generated());
                print!("{}", render_stats(&collect_stats(&self.roster, &self.ledger)));
            }
            Command::Export => {
                println!("\nSaving match history to JSON...");
                match save_match_log(&self.outputs.match_log, &self.rounds, &self.roster) {
                    Ok(()) => println!("Matches saved to {}", self.outputs.match_log.display()),
                    Err(e) => println!("Could not save matches: {:#}", e),
                }
            }
            Command::Exit => {
                println!("\nExiting the game scheduler. Goodbye!");
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Schedules the next round and records it in the ledger
    pub fn generate_round(&mut self) -> Round {
        let limits = MatchLimits {
            partner_diff_limit: self.config.partner_diff_limit,
            team_diff_limit: self.config.team_diff_limit,
        };
        let pool = self.pool.get_or_insert_with(|| {
            println!("\nGenerating valid matches...");
            build_match_pool(self.partnerships.partnerships(&self.roster), limits)
        });

        if !pool.is_empty() && self.ledger.history().len() >= pool.len() {
            println!("\nAll matches played, resetting to zero...");
        }
        let round = schedule_round(pool, &mut self.ledger, self.config.num_courts, &mut self.rng);
        self.ledger.record_round(&round);
        self.rounds.push(round.clone());
        round
    }

    fn write_player_stats(&self) {
        let Some(path) = &self.outputs.player_stats else {
            return;
        };
        let stats = collect_stats(&self.roster, &self.ledger);
        match write_stats_csv(path, &stats) {
            Ok(()) => println!("Player statistics saved to {}", path.display()),
            Err(e) => log::warn!("could not write player statistics: {:#}", e),
        }
    }
}
