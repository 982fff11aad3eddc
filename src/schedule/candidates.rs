use std::collections::HashSet;
use super::types::{Match, MatchPool, Partnership};

/// Skill limits a match has to respect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub partner_diff_limit: i32,
    pub team_diff_limit: i32,
}

impl MatchLimits {
    pub fn allows(&self, team1: &Partnership, team2: &Partnership) -> bool {
        if team1.shares_player_with(team2) {
            return false;
        }
        if team1.gap() > self.partner_diff_limit || team2.gap() > self.partner_diff_limit {
            return false;
        }
        (team1.score() - team2.score()).abs() <= self.team_diff_limit
    }
}

/// Combines partnerships into every legal 2-vs-2 match.
///
/// Walks all ordered pairs of partnerships, so a match is seen twice (once
/// from each side); the canonical `Match` collapses both into one entry.
/// Different partner splits of the same four players stay separate.
pub fn build_match_pool(partnerships: &[Partnership], limits: MatchLimits) -> MatchPool {
    let mut seen: HashSet<Match> = HashSet::new();
    let mut matches = Vec::new();

    for team1 in partnerships {
        for team2 in partnerships {
            if !limits.allows(team1, team2) {
                continue;
            }
            let candidate = Match::new(team1.clone(), team2.clone());
            if seen.insert(candidate.clone()) {
                matches.push(candidate);
            }
        }
    }

    log::info!(
        "Generated {} valid matches from {} partnerships",
        matches.len(),
        partnerships.len()
    );
    MatchPool::from_matches(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::partnerships::all_partnerships;
    use crate::schedule::types::Player;

    fn roster(scores: &[(&str, i32)]) -> Vec<Player> {
        scores
            .iter()
            .map(|(n, s)| Player { name: n.to_string(), colour: "red".into(), gender: "m".into(), skill_score: *s })
            .collect()
    }

    const LOOSE: MatchLimits = MatchLimits { partner_diff_limit: 1000, team_diff_limit: 1000 };

    #[test]
    fn four_equal_players_give_three_partner_splits() {
        let players = roster(&[("A", 50), ("B", 50), ("C", 50), ("D", 50)]);
        let pool = build_match_pool(&all_partnerships(&players), LOOSE);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn every_match_respects_the_limits() {
        let players = roster(&[
            ("A", 50), ("B", 50), ("C", 30), ("D", 70), ("E", 45), ("F", 62), ("G", 20), ("H", 90),
        ]);
        let limits = MatchLimits { partner_diff_limit: 20, team_diff_limit: 10 };
        let pool = build_match_pool(&all_partnerships(&players), limits);

        assert!(!pool.is_empty());
        for m in pool.iter() {
            assert!(m.team1.gap() <= 20, "{:?}", m);
            assert!(m.team2.gap() <= 20, "{:?}", m);
            assert!(m.team_gap() <= 10, "{:?}", m);
            let distinct: HashSet<&str> = m.players().into_iter().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn pool_has_no_duplicate_identities() {
        let players = roster(&[("A", 10), ("B", 20), ("C", 30), ("D", 40), ("E", 50), ("F", 60)]);
        let pool = build_match_pool(&all_partnerships(&players), LOOSE);

        let unique: HashSet<&Match> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len());
        // C(6,4) player sets times 3 splits each
        assert_eq!(pool.len(), 45);
    }

    #[test]
    fn wide_partner_gap_is_rejected() {
        let players = roster(&[("A", 0), ("B", 100), ("C", 50), ("D", 50)]);
        let limits = MatchLimits { partner_diff_limit: 20, team_diff_limit: 1000 };
        let pool = build_match_pool(&all_partnerships(&players), limits);

        // Every split puts someone next to a partner 50+ points away
        assert!(pool.is_empty());
    }

    #[test]
    fn fewer_than_four_players_yield_an_empty_pool() {
        let players = roster(&[("A", 50), ("B", 50), ("C", 50)]);
        assert!(build_match_pool(&all_partnerships(&players), LOOSE).is_empty());
    }
}
