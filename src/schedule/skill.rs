use rand::RngCore;
use crate::config::SessionConfig;
use super::types::is_female;

/// Computes a player's skill estimate from the configured colour rank, the
/// gender modifier and a random jitter in `[0, temperature]`.
///
/// A failing random source never aborts scoring: the jitter is dropped and
/// the deterministic part is returned.
pub fn skill_score<R: RngCore + ?Sized>(config: &SessionConfig, colour: &str, gender: &str, rng: &mut R) -> i32 {
    let mut score = config.skill_scores.get(colour.trim()).copied().unwrap_or(0);
    if is_female(gender) {
        score += config.gender_score_modifier;
    }

    match jitter(rng, config.temperature) {
        Ok(extra) => score.saturating_add(extra),
        Err(e) => {
            log::warn!("skill jitter unavailable for colour '{}': {}", colour, e);
            score
        }
    }
}

/// Uniform integer in `[0, upper]`
fn jitter<R: RngCore + ?Sized>(rng: &mut R, upper: u32) -> Result<i32, rand::Error> {
    if upper == 0 {
        return Ok(0);
    }
    let mut bytes = [0u8; 8];
    rng.try_fill_bytes(&mut bytes)?;
    // Modulo bias is below 2^-32 for any u32 span.
    let span = u64::from(upper) + 1;
    let draw = u64::from_le_bytes(bytes) % span;
    Ok(i32::try_from(draw).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Random source that always fails
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    /// Random source that only ever yields all-ones bytes
    struct SaturatedRng;

    impl RngCore for SaturatedRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0xFF)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0xFF);
            Ok(())
        }
    }

    fn config(temperature: u32) -> SessionConfig {
        SessionConfig {
            team_diff_limit: 10,
            partner_diff_limit: 20,
            num_courts: 2,
            skill_scores: [("red".to_string(), 50), ("blue".to_string(), 70)].into_iter().collect(),
            gender_score_modifier: -10,
            temperature,
        }
    }

    #[test]
    fn combines_colour_rank_and_gender_modifier() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = config(0);
        assert_eq!(skill_score(&config, "blue", "m", &mut rng), 70);
        assert_eq!(skill_score(&config, "blue", "F", &mut rng), 60);
        assert_eq!(skill_score(&config, "red", "f", &mut rng), 40);
    }

    #[test]
    fn unknown_colour_scores_baseline() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(skill_score(&config(0), "purple", "m", &mut rng), 0);
    }

    #[test]
    fn jitter_stays_within_temperature() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = config(5);
        let scores: Vec<i32> = (0..500).map(|_| skill_score(&config, "red", "m", &mut rng)).collect();

        assert!(scores.iter().all(|s| (50..=55).contains(s)));
        // Both ends of the range get hit over enough draws
        assert!(scores.contains(&50));
        assert!(scores.contains(&55));
    }

    #[test]
    fn failing_rng_degrades_to_deterministic_score() {
        assert_eq!(skill_score(&config(5), "blue", "f", &mut BrokenRng), 60);
    }

    #[test]
    fn huge_temperature_never_wraps_negative() {
        let score = skill_score(&config(u32::MAX), "blue", "m", &mut SaturatedRng);
        assert_eq!(score, i32::MAX);
    }
}
