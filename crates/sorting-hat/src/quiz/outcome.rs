use super::domain::ScoreMap;
use super::QuizError;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick the house with the highest total, drawing uniformly among exact ties.
pub fn resolve_winner<R: Rng + ?Sized>(score: &ScoreMap, rng: &mut R) -> Result<String, QuizError> {
    let best = score
        .iter()
        .map(|(_, total)| total)
        .fold(f64::NEG_INFINITY, f64::max);

    let leaders: Vec<&str> = score
        .iter()
        .filter(|&(_, total)| total == best)
        .map(|(house, _)| house)
        .collect();

    leaders
        .choose(rng)
        .map(|house| house.to_string())
        .ok_or(QuizError::EmptyConfiguration)
}
