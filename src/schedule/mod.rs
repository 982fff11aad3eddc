pub mod types;
pub mod skill;
pub mod partnerships;
pub mod candidates;
pub mod ledger;
pub mod round;

pub use types::{Match, MatchPool, Partnership, Player, Round};
pub use skill::skill_score;
pub use partnerships::PartnershipGenerator;
pub use candidates::{build_match_pool, MatchLimits};
pub use ledger::FairnessLedger;
pub use round::schedule_round;
