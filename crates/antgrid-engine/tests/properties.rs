//! Behavioural properties of seeding and the generation loop.

use antgrid_core::{Cell, Color, TrailCodec, TrailLevel};
use antgrid_engine::Strategy as Seeding;
use antgrid_engine::{simulate, AntCount, ContributionCell, SeedMode, SimulationConfig, Simulator};
use antgrid_test_utils::{
    config, contribution_fixture, empty_config, random_config, CONTRIBUTION_FIXTURE_SIZE,
};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = SeedMode> {
    prop_oneof![
        Just(SeedMode::Random),
        Just(SeedMode::Empty),
        Just(SeedMode::Contribution),
        Just(SeedMode::Auto),
    ]
}

// ── Snapshots ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn snapshot_count_and_shape(
        width in 1usize..12,
        height in 1usize..9,
        generations in 0u64..20,
        mode in mode_strategy(),
        seed in any::<u64>(),
    ) {
        let cfg = SimulationConfig {
            generations,
            seed,
            ..config(width, height, mode, AntCount::Fixed(2))
        };
        let frames = simulate(&cfg).unwrap();
        prop_assert_eq!(frames.len() as u64, generations + 1);
        for g in &frames {
            prop_assert_eq!(g.width(), width);
            prop_assert_eq!(g.height(), height);
            prop_assert_eq!(g.cell_count(), width * height);
            prop_assert_eq!(g.views().count(), width * height);
        }
    }

    #[test]
    fn ant_moves_one_wrapped_step(seed in any::<u64>(), steps in 1usize..40) {
        // A 3x2 torus forces constant wrapping on both axes.
        let cfg = SimulationConfig { seed, ..config(3, 2, SeedMode::Random, AntCount::Fixed(2)) };
        let mut sim = Simulator::new(cfg).unwrap();
        let torus = *sim.grid().torus();
        for _ in 0..steps {
            let before: Vec<_> = sim.ants().iter().map(|a| a.position).collect();
            sim.step();
            for (ant, old) in sim.ants().iter().zip(before) {
                prop_assert_eq!(ant.position, torus.step(old, ant.heading));
            }
            for ant in sim.ants() {
                prop_assert!(sim.grid().at(ant.position).is_occupied());
            }
        }
    }

    #[test]
    fn turn_rule(seed in any::<u64>(), steps in 1usize..60) {
        // One ant on an empty grid never meets a marker, so the cell it
        // stands on decides the turn alone.
        let cfg = SimulationConfig { seed, ..empty_config(7, 5) };
        let mut sim = Simulator::new(cfg).unwrap();
        for _ in 0..steps {
            let ant = sim.ants().as_slice()[0];
            let colored = sim.grid().at(ant.position).level().is_colored();
            sim.step();
            let heading = sim.ants().as_slice()[0].heading;
            let expected = if colored {
                (ant.heading.index() + 1) % 4
            } else {
                (ant.heading.index() + 3) % 4
            };
            prop_assert_eq!(heading.index(), expected);
        }
    }
}

// ── Cells and palette ──────────────────────────────────────────────

#[test]
fn cover_uncover_restores_trail() {
    let codec = TrailCodec::default();
    for raw in 1..=4u8 {
        let level = TrailLevel::try_from(raw).unwrap();
        let mut cell = Cell::trail(level, &codec);
        cell.cover(codec.ant);
        assert_eq!(cell.display_color(), codec.ant);
        assert!(cell.uncover(&codec));
        assert_eq!(cell.level(), level);
        assert_eq!(cell.display_color(), codec.level_to_color(level));
    }
}

#[test]
fn codec_is_idempotent_on_palette_levels() {
    let codec = TrailCodec::default();
    for raw in 0..=4u8 {
        let level = TrailLevel::try_from(raw).unwrap();
        assert_eq!(codec.color_to_level(codec.level_to_color(level)), level);
    }
    assert_eq!(
        codec.color_to_level(Color::from_u32(0x123456)),
        TrailLevel::EMPTY
    );
}

// ── Seeding ────────────────────────────────────────────────────────

#[test]
fn empty_single_ant_zero_generations() {
    let cfg = SimulationConfig {
        generations: 0,
        ..empty_config(53, 7)
    };
    let frames = simulate(&cfg).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].alive_points(), vec![(26, 3)]);
}

#[test]
fn all_markers_places_one_ant_per_marker() {
    for seed in 0..32 {
        let sim = Simulator::new(random_config(4, 4, seed)).unwrap();
        let report = sim.seed_report();
        assert_eq!(report.strategy, Seeding::Random);
        assert_eq!(report.placed, report.candidates, "seed {seed}");
        assert_eq!(sim.ants().len(), report.candidates);
        // Every marker now carries an ant, so no bare marker remains.
        assert_eq!(sim.grid().count_level(TrailLevel::MARKER), 0);
        assert_eq!(sim.grid().count_level(TrailLevel::ANT), report.placed);
        assert_eq!(sim.grid().occupied_count(), report.placed);
    }
}

#[test]
fn out_of_range_contribution_is_ignored() {
    let cfg = SimulationConfig {
        mode: SeedMode::Contribution,
        contributions: vec![ContributionCell::new(-1, 0, 3)],
        generations: 3,
        ..Default::default()
    };
    let mut sim = Simulator::new(cfg).unwrap();
    assert_eq!(sim.seed_report().strategy, Seeding::Contribution);
    assert_eq!(sim.seed_report().dropped_contributions, 1);
    assert_eq!(sim.seed_report().candidates, 0);
    // The requested ant is still placed as a filler.
    assert_eq!(sim.ants().len(), 1);
    assert_eq!(sim.grid().alive_points().len(), 1);
    assert_eq!(sim.run_configured().len(), 4);
}

#[test]
fn contribution_ants_start_on_peak_days() {
    let (width, height) = CONTRIBUTION_FIXTURE_SIZE;
    let cfg = SimulationConfig {
        width,
        height,
        mode: SeedMode::Auto,
        ant_count: AntCount::AllMarkers,
        contributions: contribution_fixture(),
        ..Default::default()
    };
    let sim = Simulator::new(cfg).unwrap();
    let mut positions = sim.ants().positions();
    positions.sort_unstable();
    assert_eq!(positions, vec![(2, 3), (5, 1)]);
    assert_eq!(sim.seed_report().dropped_contributions, 1);
}

#[test]
fn auto_without_data_simulates() {
    let sim = Simulator::new(SimulationConfig::default()).unwrap();
    assert_eq!(sim.seed_report().strategy, Seeding::Simulated);
    assert_eq!(sim.ants().len(), 1);
}

#[test]
fn all_markers_in_empty_mode_places_centre_ant() {
    let sim = Simulator::new(config(9, 5, SeedMode::Empty, AntCount::AllMarkers)).unwrap();
    assert_eq!(sim.ants().positions(), vec![(4, 2)]);
    assert_eq!(sim.grid().at((4, 2)).level(), TrailLevel::EMPTY);
}

#[test]
fn extinction_does_not_end_run() {
    let cfg = SimulationConfig {
        generations: 25,
        ..empty_config(2, 2)
    };
    let frames = simulate(&cfg).unwrap();
    assert_eq!(frames.len(), 26);
}
