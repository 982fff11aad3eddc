use itertools::Itertools;
use super::types::{Partnership, Player};

/// Every unordered pair of roster players
pub fn all_partnerships(roster: &[Player]) -> Vec<Partnership> {
    roster
        .iter()
        .tuple_combinations()
        .map(|(a, b)| Partnership::new((a.name.clone(), a.skill_score), (b.name.clone(), b.skill_score)))
        .collect()
}

/// Caches the partnerships of the last roster it saw and rebuilds them only
/// when a different roster comes in.
#[derive(Debug, Default)]
pub struct PartnershipGenerator {
    roster_key: Vec<(String, i32)>,
    partnerships: Vec<Partnership>,
    built: bool,
}

impl PartnershipGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partnerships(&mut self, roster: &[Player]) -> &[Partnership] {
        let key: Vec<(String, i32)> = roster.iter().map(|p| (p.name.clone(), p.skill_score)).collect();
        if !self.built || key != self.roster_key {
            log::debug!("building partnerships for {} players", roster.len());
            self.partnerships = all_partnerships(roster);
            self.roster_key = key;
            self.built = true;
        }
        &self.partnerships
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Player { name: n.to_string(), colour: "red".into(), gender: "m".into(), skill_score: i as i32 * 10 })
            .collect()
    }

    #[test]
    fn yields_n_choose_2_distinct_pairs() {
        let pairs = all_partnerships(&roster(&["A", "B", "C", "D", "E"]));
        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|p| p.names()[0] != p.names()[1]));

        let unique: std::collections::HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn tiny_rosters_have_no_pairs() {
        assert!(all_partnerships(&roster(&[])).is_empty());
        assert!(all_partnerships(&roster(&["A"])).is_empty());
    }

    #[test]
    fn cache_follows_roster_changes() {
        let mut generator = PartnershipGenerator::new();
        assert_eq!(generator.partnerships(&roster(&["A", "B", "C"])).len(), 3);
        assert_eq!(generator.partnerships(&roster(&["A", "B", "C"])).len(), 3);
        assert_eq!(generator.partnerships(&roster(&["A", "B", "C", "D"])).len(), 6);
        assert!(generator.partnerships(&roster(&[])).is_empty());
    }
}
