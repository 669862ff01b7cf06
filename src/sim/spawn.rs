//! Item spawner
//!
//! One call, one item. The spawner only appends to the live collection; it
//! never touches score or lives.

use rand::Rng;

use super::difficulty::spawn_speed;
use super::state::{FallingItem, GameState, ItemKind, PlayArea};
use crate::catalog::LOGOS;
use crate::tuning::Tuning;

/// Roll a new item. Hazards come up with `hazard_probability`; logos are
/// uniform over the catalog. The item starts fully above the play area with
/// its whole width inside it.
pub fn roll_item<R: Rng>(
    rng: &mut R,
    id: u32,
    tuning: &Tuning,
    area: &PlayArea,
    multiplier: f32,
) -> FallingItem {
    let hazard = rng.random::<f32>() < tuning.hazard_probability;
    let kind = if hazard {
        ItemKind::Obstacle
    } else {
        ItemKind::Logo {
            logo: rng.random_range(0..LOGOS.len()),
        }
    };

    let max_left = (100.0 - area.percent_of_width(tuning.item_size)).max(0.0);
    let left_percent = rng.random::<f32>() * max_left;

    FallingItem {
        id,
        kind,
        top: -tuning.item_size,
        left_percent,
        speed: spawn_speed(tuning.base_speed(hazard), multiplier),
    }
}

/// Spawn one item into the session
pub fn spawn(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let multiplier = state.difficulty();
    let item = roll_item(&mut state.rng, id, &state.tuning, &state.area, multiplier);
    log::debug!(
        "Spawned #{} {:?} at {:.1}% speed {:.2}",
        item.id,
        item.kind,
        item.left_percent,
        item.speed
    );
    state.items.push(item);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_item_fits_horizontally() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let area = PlayArea {
            width: 300.0,
            height: 600.0,
        };
        for id in 0..500 {
            let item = roll_item(&mut rng, id, &tuning, &area, 1.0);
            let right = item.left_px(&area) + tuning.item_size;
            assert!(item.left_percent >= 0.0);
            assert!(right <= area.width + 1e-3);
            assert_eq!(item.top, -60.0);
        }
    }

    #[test]
    fn test_speed_scales_with_multiplier() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning::default();
        let area = PlayArea::default();
        for id in 0..100 {
            let item = roll_item(&mut rng, id, &tuning, &area, 2.0);
            let expected = if item.kind.is_hazard() { 3.0 } else { 2.0 };
            assert_eq!(item.speed, expected);
        }
    }

    #[test]
    fn test_hazard_probability_extremes() {
        let mut rng = Pcg32::seed_from_u64(9);
        let area = PlayArea::default();
        let all = Tuning {
            hazard_probability: 1.0,
            ..Default::default()
        };
        let none = Tuning {
            hazard_probability: 0.0,
            ..Default::default()
        };
        for id in 0..50 {
            assert!(roll_item(&mut rng, id, &all, &area, 1.0).kind.is_hazard());
            assert!(!roll_item(&mut rng, id, &none, &area, 1.0).kind.is_hazard());
        }
    }

    #[test]
    fn test_hazard_rate_roughly_matches() {
        let mut rng = Pcg32::seed_from_u64(42);
        let tuning = Tuning::default();
        let area = PlayArea::default();
        let hazards = (0..10_000)
            .filter(|&id| roll_item(&mut rng, id, &tuning, &area, 1.0).kind.is_hazard())
            .count();
        assert!((1500..2500).contains(&hazards), "hazards = {hazards}");
    }

    #[test]
    fn test_spawn_appends_with_fresh_ids() {
        let mut state = GameState::new(5, Tuning::default());
        let a = spawn(&mut state);
        let b = spawn(&mut state);
        assert_ne!(a, b);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.score(), 0);
    }
}
