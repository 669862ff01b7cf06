// Property tests for the simulation invariants that must hold for any
// input sequence: catcher bounds, fall monotonicity, difficulty ramp,
// score/lives bookkeeping, seed determinism, resolve order and logo odds.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use logo_catcher::catalog::LOGOS;
use logo_catcher::consts::FRAME_MS;
use logo_catcher::sim::difficulty::{ramp, spawn_interval};
use logo_catcher::sim::{
    CatchContext, Catcher, FallingItem, GameEvent, GamePhase, GameState, ItemKind, PlayArea,
    StatDelta, TickInput, resolve, roll_item, tick,
};
use logo_catcher::Tuning;

fn playing(seed: u64, width: f32, height: f32) -> GameState {
    let mut state = GameState::new(seed, Tuning::default());
    state.set_play_area(width, height);
    state.begin_countdown();
    state.begin_play();
    state
}

prop_compose! {
    fn arb_input()(
        target in proptest::option::of(-500.0f32..600.0),
        nudge in -3i32..=3,
        autopilot in any::<bool>(),
    ) -> TickInput {
        TickInput {
            catcher_target: target,
            nudge,
            autopilot,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn arb_item()(
        hazard in any::<bool>(),
        logo in 0usize..4,
        top in 450.0f32..820.0,
        left_percent in 0.0f32..88.0,
        speed in 0.5f32..3.0,
    ) -> FallingItem {
        FallingItem {
            id: 0,
            kind: if hazard { ItemKind::Obstacle } else { ItemKind::Logo { logo } },
            top,
            left_percent,
            speed,
        }
    }
}

fn arb_items() -> impl Strategy<Value = Vec<FallingItem>> {
    proptest::collection::vec(arb_item(), 1..16).prop_map(|mut items| {
        for (i, item) in items.iter_mut().enumerate() {
            item.id = i as u32 + 1;
        }
        items
    })
}

fn event_item(event: &GameEvent) -> u32 {
    match event {
        GameEvent::Catch { item_id, .. } | GameEvent::Hit { item_id } => *item_id,
        GameEvent::GameOver { .. } => u32::MAX,
    }
}

/// (points, lives lost) a batch of deltas adds up to
fn tally(deltas: &[StatDelta]) -> (u32, usize) {
    deltas.iter().fold((0, 0), |(points, lost), delta| match delta {
        StatDelta::Points(p) => (points + p, lost),
        StatDelta::LoseLife => (points, lost + 1),
    })
}

proptest! {
    #[test]
    fn resolve_ignores_item_order(
        (items, shuffled) in arb_items()
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle())),
        catcher_percent in 0.0f32..100.0,
    ) {
        let mut state = playing(1, 500.0, 800.0);
        let area = state.area;
        let size = state.tuning.catcher_size;
        state.catcher.move_to(catcher_percent, &area, size);
        let ctx = CatchContext::snapshot(&state, 1.0);

        let a = resolve(items, &ctx);
        let b = resolve(shuffled, &ctx);

        prop_assert_eq!(tally(&a.deltas), tally(&b.deltas));
        prop_assert_eq!(a.missed, b.missed);

        let mut events_a = a.events;
        let mut events_b = b.events;
        events_a.sort_by_key(event_item);
        events_b.sort_by_key(event_item);
        prop_assert_eq!(events_a, events_b);

        let mut survivors_a = a.survivors;
        let mut survivors_b = b.survivors;
        survivors_a.sort_by_key(|item| item.id);
        survivors_b.sort_by_key(|item| item.id);
        prop_assert_eq!(survivors_a, survivors_b);
    }

    #[test]
    fn catcher_never_leaves_area(
        width in 100.0f32..1200.0,
        moves in proptest::collection::vec(arb_input(), 1..60),
    ) {
        let mut state = playing(1, width, 800.0);
        let (min, max) = Catcher::limits(&state.area, state.tuning.catcher_size);
        for input in &moves {
            tick(&mut state, input, FRAME_MS);
            prop_assert!(state.catcher.x_percent >= min - 1e-4);
            prop_assert!(state.catcher.x_percent <= max + 1e-4);
        }
    }

    #[test]
    fn items_only_fall(
        seed in any::<u64>(),
        gaps in proptest::collection::vec(0.0f64..250.0, 1..120),
    ) {
        let mut state = playing(seed, 500.0, 800.0);
        for gap in gaps {
            let before: Vec<(u32, f32)> = state.items.iter().map(|i| (i.id, i.top)).collect();
            tick(&mut state, &TickInput::default(), gap);
            for item in &state.items {
                if let Some(&(_, top)) = before.iter().find(|(id, _)| *id == item.id) {
                    prop_assert!(item.top > top);
                }
            }
        }
    }

    #[test]
    fn difficulty_never_decreases(
        start in 1.0f32..10.0,
        steps in 1usize..50,
    ) {
        let mut m = start;
        for _ in 0..steps {
            let next = ramp(m, 0.2);
            prop_assert!(next >= m);
            prop_assert!(spawn_interval(2000.0, next) <= spawn_interval(2000.0, m));
            m = next;
        }
    }

    #[test]
    fn score_tracks_catches_and_lives_track_hits(
        seed in any::<u64>(),
        frames in 60usize..1500,
    ) {
        let mut state = playing(seed, 500.0, 800.0);
        let auto = TickInput { autopilot: true, ..Default::default() };
        let mut points = 0u64;
        let mut hits = 0u8;
        let mut game_overs = 0;
        for _ in 0..frames {
            for event in tick(&mut state, &auto, FRAME_MS) {
                match event {
                    GameEvent::Catch { points: p, .. } => points += p as u64,
                    GameEvent::Hit { .. } => hits += 1,
                    GameEvent::GameOver { .. } => game_overs += 1,
                }
            }
        }
        prop_assert_eq!(state.score(), points);
        prop_assert_eq!(state.lives(), 3u8.saturating_sub(hits));
        prop_assert!(game_overs <= 1);
        prop_assert_eq!(game_overs == 1, state.phase == GamePhase::GameOver);
    }

    #[test]
    fn same_seed_same_run(seed in any::<u64>()) {
        let mut a = playing(seed, 500.0, 800.0);
        let mut b = playing(seed, 500.0, 800.0);
        let auto = TickInput { autopilot: true, ..Default::default() };
        for _ in 0..600 {
            prop_assert_eq!(tick(&mut a, &auto, FRAME_MS), tick(&mut b, &auto, FRAME_MS));
        }
        prop_assert_eq!(a.items, b.items);
    }

    #[test]
    fn item_caught_at_most_once(left in 0.0f32..90.0, top in 500.0f32..800.0) {
        let mut state = playing(1, 500.0, 800.0);
        state.items.push(FallingItem {
            id: 999,
            kind: ItemKind::Logo { logo: 0 },
            top,
            left_percent: left,
            speed: 1.0,
        });
        let mut catches = 0;
        for _ in 0..200 {
            catches += tick(&mut state, &TickInput::default(), FRAME_MS)
                .iter()
                .filter(|e| matches!(e, GameEvent::Catch { item_id: 999, .. }))
                .count();
        }
        prop_assert!(catches <= 1);
        prop_assert!(state.items.iter().all(|i| i.id != 999));
    }
}

#[test]
fn catcher_limits_are_symmetric() {
    let area = PlayArea {
        width: 640.0,
        height: 480.0,
    };
    let (min, max) = Catcher::limits(&area, 80.0);
    assert!((min + max - 100.0).abs() < 1e-4);
}

#[test]
fn logo_choice_is_uniform() {
    let tuning = Tuning {
        hazard_probability: 0.0,
        ..Default::default()
    };
    let area = PlayArea {
        width: 500.0,
        height: 800.0,
    };
    let mut rng = Pcg32::seed_from_u64(99);
    let rolls = 20_000;
    let mut counts = vec![0u32; LOGOS.len()];
    for id in 0..rolls {
        match roll_item(&mut rng, id, &tuning, &area, 1.0).kind {
            ItemKind::Logo { logo } => counts[logo] += 1,
            ItemKind::Obstacle => panic!("hazards are switched off"),
        }
    }
    // Expect 5000 each; a fair roll stays well inside +-10%
    let expected = rolls as f64 / LOGOS.len() as f64;
    for (logo, &count) in counts.iter().enumerate() {
        let share = count as f64 / expected;
        assert!((0.9..1.1).contains(&share), "logo {logo}: {count} of {rolls}");
    }
}
