use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Session settings read from `config.yml`. Keys this struct does not name
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Largest allowed gap between the two team totals of a match
    #[serde(rename = "TEAM_DIFF_LIMIT")]
    pub team_diff_limit: i32,

    /// Largest allowed skill gap between two partners
    #[serde(rename = "PARTNER_DIFF_LIMIT")]
    pub partner_diff_limit: i32,

    #[serde(rename = "NUM_COURTS", default = "default_num_courts")]
    pub num_courts: usize,

    /// Base rank per colour tag. Unknown colours score 0.
    #[serde(rename = "SKILL_SCORES", default)]
    pub skill_scores: HashMap<String, i32>,

    #[serde(rename = "GENDER_SCORE_MODIFIER", default = "default_gender_modifier")]
    pub gender_score_modifier: i32,

    /// Upper bound of the random jitter added to every skill score
    #[serde(rename = "TEMPERATURE", default)]
    pub temperature: u32,
}

fn default_num_courts() -> usize {
    5
}

fn default_gender_modifier() -> i32 {
    -10
}

impl SessionConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("Invalid session configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Failed to parse '{}'", path.display()))
    }
}
