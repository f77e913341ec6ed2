//! Escape probability.

use crate::config::BattleConfig;

/// Probability that the player escapes.
///
/// # Formula
///
/// ```text
/// ratio  = player_speed / (player_speed + avg_enemy_speed)
/// chance = clamp(ratio * weight + base, min, max)
/// ```
///
/// With the default configuration this is
/// `clamp(0.1, 0.9, ratio * 0.5 + 0.25)`. An empty enemy list averages to 0
/// and a zero denominator counts as an even ratio. Bounds are applied as
/// `max(min)` then `min(max)`, so malformed bounds never panic.
pub fn flee_chance(player_speed: f64, enemy_speeds: &[f64], config: &BattleConfig) -> f64 {
    let player_speed = player_speed.max(0.0);
    let avg_enemy_speed = if enemy_speeds.is_empty() {
        0.0
    } else {
        enemy_speeds.iter().map(|s| s.max(0.0)).sum::<f64>() / enemy_speeds.len() as f64
    };

    let denominator = player_speed + avg_enemy_speed;
    let ratio = if denominator > 0.0 {
        player_speed / denominator
    } else {
        0.5
    };

    (ratio * config.flee_speed_weight + config.flee_base_chance)
        .max(config.flee_min_chance)
        .min(config.flee_max_chance)
}
