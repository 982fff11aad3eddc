use std::collections::HashSet;
use serde::{Serialize, Deserialize};

/// A player attending the session, scored once at load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub colour: String,
    pub gender: String,
    pub skill_score: i32,
}

impl Player {
    pub fn is_female(&self) -> bool {
        is_female(&self.gender)
    }
}

pub fn is_female(gender: &str) -> bool {
    gender.trim().eq_ignore_ascii_case("f")
}

/// Two distinct players on the same team, stored in name order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partnership {
    members: [(String, i32); 2],
}

impl Partnership {
    pub fn new(a: (String, i32), b: (String, i32)) -> Self {
        let members = if a.0 <= b.0 { [a, b] } else { [b, a] };
        Partnership { members }
    }

    pub fn names(&self) -> [&str; 2] {
        [&self.members[0].0, &self.members[1].0]
    }

    /// Combined skill of the team
    pub fn score(&self) -> i32 {
        self.members[0].1 + self.members[1].1
    }

    /// Skill gap between the two partners
    pub fn gap(&self) -> i32 {
        (self.members[0].1 - self.members[1].1).abs()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|(n, _)| n == name)
    }

    pub fn shares_player_with(&self, other: &Partnership) -> bool {
        other.names().iter().any(|n| self.contains(n))
    }
}

/// Two disjoint partnerships playing each other.
///
/// Teams are kept in canonical order, so the derived `Eq`/`Hash` treat
/// `A+B vs C+D` and `C+D vs A+B` as the same match while `A+C vs B+D`
/// stays a different one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub team1: Partnership,
    pub team2: Partnership,
}

impl Match {
    pub fn new(a: Partnership, b: Partnership) -> Self {
        if a <= b {
            Match { team1: a, team2: b }
        } else {
            Match { team1: b, team2: a }
        }
    }

    pub fn players(&self) -> [&str; 4] {
        let [p1, p2] = self.team1.names();
        let [p3, p4] = self.team2.names();
        [p1, p2, p3, p4]
    }

    pub fn team_gap(&self) -> i32 {
        (self.team1.score() - self.team2.score()).abs()
    }
}

/// Every legal match for the current roster, deduplicated
#[derive(Debug, Clone, Default)]
pub struct MatchPool {
    matches: Vec<Match>,
}

impl MatchPool {
    pub fn from_matches(matches: Vec<Match>) -> Self {
        MatchPool { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }
}

/// Matches played simultaneously, one per court
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pub matches: Vec<Match>,
}

impl Round {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn participants(&self) -> HashSet<&str> {
        self.matches.iter().flat_map(|m| m.players()).collect()
    }

    /// Roster players not on any court, in roster order
    pub fn sitting_out<'a>(&self, roster: &'a [Player]) -> Vec<&'a str> {
        let playing = self.participants();
        roster
            .iter()
            .map(|p| p.name.as_str())
            .filter(|name| !playing.contains(name))
            .collect()
    }
}
