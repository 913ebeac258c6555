use folio_core::counter::EXPERIENCE_MANUAL_MAX;
use folio_core::{StatCounters, StatKind, TickOutcome};

fn run_to_completion(counters: &mut StatCounters, kind: StatKind) -> usize {
    let mut ticks = 0;
    loop {
        ticks += 1;
        if counters.tick(kind) == TickOutcome::Finished {
            return ticks;
        }
        assert!(ticks < 1000, "{kind:?} never finished");
    }
}

#[test]
fn animation_stops_at_each_target() {
    let mut counters = StatCounters::new();
    assert!(counters.start());
    for kind in StatKind::ALL {
        let ticks = run_to_completion(&mut counters, kind);
        assert_eq!(ticks as u32, kind.target());
        assert_eq!(counters.get(kind), kind.target());
        assert_eq!(counters.tick(kind), TickOutcome::Finished);
        assert_eq!(counters.get(kind), kind.target());
    }
    assert_eq!(counters.values(), (3, 10, 15));
}

#[test]
fn timers_are_independent() {
    let mut counters = StatCounters::new();
    counters.tick(StatKind::Technologies);
    counters.tick(StatKind::Technologies);
    counters.tick(StatKind::Projects);
    assert_eq!(counters.values(), (0, 1, 2));
}

#[test]
fn tick_pulls_manual_overshoot_back_to_target() {
    let mut counters = StatCounters::new();
    for _ in 0..12 {
        counters.increment(StatKind::Projects);
    }
    assert_eq!(counters.get(StatKind::Projects), 12);
    assert_eq!(counters.tick(StatKind::Projects), TickOutcome::Finished);
    assert_eq!(counters.get(StatKind::Projects), 10);
}

#[test]
fn experience_increment_caps_at_ten() {
    let mut counters = StatCounters::new();
    for _ in 0..3 {
        counters.increment(StatKind::Experience);
    }
    assert_eq!(counters.values(), (3, 0, 0));
    for _ in 0..8 {
        counters.increment(StatKind::Experience);
    }
    assert_eq!(counters.values(), (EXPERIENCE_MANUAL_MAX, 0, 0));
}

// Only experience has a manual ceiling; projects and technologies keep
// climbing past their animation targets.
#[test]
fn other_increments_are_unbounded() {
    let mut counters = StatCounters::new();
    for _ in 0..50 {
        counters.increment(StatKind::Projects);
        counters.increment(StatKind::Technologies);
    }
    assert_eq!(counters.values(), (0, 50, 50));
}

#[test]
fn reset_always_returns_to_zero_and_allows_restart() {
    let mut counters = StatCounters::new();
    assert!(counters.start());
    assert!(!counters.start());
    run_to_completion(&mut counters, StatKind::Technologies);
    counters.increment(StatKind::Experience);
    counters.increment(StatKind::Projects);
    counters.reset();
    assert_eq!(counters.values(), (0, 0, 0));
    assert!(!counters.started());
    assert!(counters.start());

    let mut fresh = StatCounters::new();
    fresh.reset();
    assert_eq!(fresh.values(), (0, 0, 0));
    assert!(!fresh.started());
}

#[test]
fn periods_are_distinct() {
    let periods: Vec<u32> = StatKind::ALL.iter().map(|kind| kind.tick_ms()).collect();
    assert_eq!(periods, vec![300, 150, 100]);
}
