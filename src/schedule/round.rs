use std::collections::HashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use super::ledger::FairnessLedger;
use super::types::{Match, MatchPool, Round};

/// Picks the next round: up to `num_courts` unplayed, player-disjoint
/// matches, favouring players with the fewest games.
///
/// Starts a new rotation cycle when every match of the pool has been played.
/// The ledger is otherwise left alone; the caller records the round once it
/// is accepted.
pub fn schedule_round<R: Rng + ?Sized>(
    pool: &MatchPool,
    ledger: &mut FairnessLedger,
    num_courts: usize,
    rng: &mut R,
) -> Round {
    if !pool.is_empty() && ledger.history().len() >= pool.len() {
        log::info!("All {} matches played, starting a new rotation", pool.len());
        ledger.reset_history();
    }

    let ledger = &*ledger;
    let played: HashSet<&Match> = ledger.history().iter().collect();
    let mut unplayed: Vec<&Match> = pool.iter().filter(|m| !played.contains(m)).collect();

    log::info!(
        "valid matches: {}, unplayed: {}, played: {}",
        pool.len(),
        unplayed.len(),
        ledger.history().len()
    );

    // Shuffle first so the stable sort breaks ties at random
    unplayed.shuffle(rng);
    unplayed.sort_by_key(|m| fairness_key(m, ledger));

    let mut chosen = Vec::new();
    let mut busy: HashSet<&str> = HashSet::new();
    for m in unplayed {
        if chosen.len() >= num_courts {
            break;
        }
        let players = m.players();
        if players.iter().any(|p| busy.contains(p)) {
            continue;
        }
        busy.extend(players);
        chosen.push(m.clone());
    }

    Round { matches: chosen }
}

/// Games already played by the four players; lower goes first
fn fairness_key(m: &Match, ledger: &FairnessLedger) -> u32 {
    m.players().iter().map(|p| ledger.games_played(p)).sum()
}
