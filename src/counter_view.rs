use std::cell::RefCell;
use std::rc::Rc;

use folio_core::profile::Profile;
use folio_core::{StatCounters, StatKind, TickOutcome};
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Animation interval handles, one slot per counter. Dropping a handle
/// cancels its timer.
#[derive(Default)]
pub(crate) struct CounterTimers {
    slots: [Option<Interval>; 3],
}

impl CounterTimers {
    pub(crate) fn arm(&mut self, kind: StatKind, interval: Interval) {
        self.slots[kind.index()] = Some(interval);
    }

    pub(crate) fn take(&mut self, kind: StatKind) -> Option<Interval> {
        self.slots[kind.index()].take()
    }

    pub(crate) fn cancel_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.take();
        }
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Starts the automatic animation unless it is already running. Each timer
/// drops its own handle once its counter reaches the target.
pub(crate) fn start_animation(
    counters: &Rc<RefCell<StatCounters>>,
    timers: &Rc<RefCell<CounterTimers>>,
    on_change: Rc<dyn Fn()>,
) -> bool {
    if !counters.borrow_mut().start() {
        return false;
    }
    for kind in StatKind::ALL {
        let counters = counters.clone();
        let timers_for_tick = timers.clone();
        let on_change = on_change.clone();
        let interval = Interval::new(kind.tick_ms(), move || {
            let outcome = counters.borrow_mut().tick(kind);
            if outcome == TickOutcome::Finished {
                let finished = timers_for_tick.borrow_mut().take(kind);
                drop(finished);
            }
            on_change();
        });
        timers.borrow_mut().arm(kind, interval);
    }
    true
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatsCounterProps {
    pub(crate) profile: &'static Profile,
    /// Notified with the new values after every tick or manual change.
    #[prop_or_default]
    pub(crate) onchange: Callback<StatCounters>,
}

#[function_component(StatsCounter)]
pub(crate) fn stats_counter(props: &StatsCounterProps) -> Html {
    let counters = use_mut_ref(StatCounters::new);
    let timers = use_mut_ref(CounterTimers::default);
    let generation = use_state(|| 0u32);
    let trigger = use_force_update();
    let refresh: Rc<dyn Fn()> = {
        let trigger = trigger.clone();
        let counters = counters.clone();
        let onchange = props.onchange.clone();
        Rc::new(move || {
            trigger.force_update();
            onchange.emit(*counters.borrow());
        })
    };

    {
        let counters = counters.clone();
        let timers = timers.clone();
        let refresh = refresh.clone();
        use_effect_with(*generation, move |generation| {
            if start_animation(&counters, &timers, refresh) {
                gloo::console::log!("counter: animation started", *generation);
            }
            move || {
                timers.borrow_mut().cancel_all();
            }
        });
    }

    let on_increment = |kind: StatKind| {
        let counters = counters.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            counters.borrow_mut().increment(kind);
            refresh();
        })
    };

    let on_reset = {
        let counters = counters.clone();
        let timers = timers.clone();
        let generation = generation.clone();
        Callback::from(move |_: MouseEvent| {
            timers.borrow_mut().cancel_all();
            counters.borrow_mut().reset();
            generation.set(generation.wrapping_add(1));
        })
    };

    let snapshot = *counters.borrow();
    let cards: Html = StatKind::ALL
        .iter()
        .map(|kind| {
            let kind = *kind;
            html! {
                <div key={kind.index()} class="stat-card">
                    <div class="icon-circle">{ kind.icon() }</div>
                    <h3 class="stat-number">{ format!("{}+", snapshot.get(kind)) }</h3>
                    <p class="stat-label">{ kind.label() }</p>
                    <button class="increment-btn" onclick={on_increment(kind)}>
                        { kind.action_label() }
                    </button>
                </div>
            }
        })
        .collect();

    let identity = &props.profile.identity;
    html! {
        <div class="stats-counter">
            <div class="stats-header">
                <h2 class="stats-title">{ "Portfolio Statistics Counter" }</h2>
                <p class="stats-subtitle">{ "Animated counters with manual controls" }</p>
            </div>

            <div class="stats-grid">{ cards }</div>

            <div class="stats-controls">
                <button class="reset-btn" onclick={on_reset}>{ "🔄 Reset All Counters" }</button>
            </div>

            <div class="info-box">
                <h4 class="info-title">{ "About This Component:" }</h4>
                <ul class="info-list">
                    <li><strong>{ "State:" }</strong>{ " experience, projects and technologies counters" }</li>
                    <li><strong>{ "Timers:" }</strong>{ " each counter animates on its own interval when shown" }</li>
                    <li><strong>{ "Controls:" }</strong>{ " increment any counter or reset them all" }</li>
                </ul>
            </div>

            <div class="developer-info">
                <h4 class="developer-title">{ "Developer Info" }</h4>
                <p><strong>{ "Name:" }</strong>{ " " }{ identity.name }</p>
                <p><strong>{ "Role:" }</strong>{ " " }{ identity.title }</p>
                <p><strong>{ "Specialization:" }</strong>{ " " }{ identity.specialization }</p>
                <p><strong>{ "Email:" }</strong>{ " " }{ props.profile.contact.email }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PROFILE;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn animation_reaches_targets_and_releases_timers() {
        let counters = Rc::new(RefCell::new(StatCounters::new()));
        let timers = Rc::new(RefCell::new(CounterTimers::default()));
        let changes = Rc::new(Cell::new(0u32));
        let on_change: Rc<dyn Fn()> = {
            let changes = changes.clone();
            Rc::new(move || changes.set(changes.get() + 1))
        };
        assert!(start_animation(&counters, &timers, on_change.clone()));
        assert!(!start_animation(&counters, &timers, on_change));
        assert_eq!(timers.borrow().active(), 3);

        TimeoutFuture::new(2_000).await;

        assert_eq!(counters.borrow().values(), (3, 10, 15));
        assert_eq!(timers.borrow().active(), 0);
        assert!(changes.get() >= 28);
    }

    #[wasm_bindgen_test]
    async fn cancel_all_stops_pending_ticks() {
        let counters = Rc::new(RefCell::new(StatCounters::new()));
        let timers = Rc::new(RefCell::new(CounterTimers::default()));
        assert!(start_animation(&counters, &timers, Rc::new(|| {})));
        timers.borrow_mut().cancel_all();
        counters.borrow_mut().reset();
        assert_eq!(timers.borrow().active(), 0);

        TimeoutFuture::new(400).await;

        assert_eq!(counters.borrow().values(), (0, 0, 0));
        assert!(!counters.borrow().started());
    }

    #[wasm_bindgen_test]
    async fn unmount_stops_the_animation() {
        let document = gloo::utils::document();
        let root = document.create_element("div").expect("create root");
        document.body().expect("body").append_child(&root).expect("attach root");
        let changes = Rc::new(Cell::new(0u32));
        let latest = Rc::new(Cell::new(StatCounters::new()));
        let onchange = {
            let changes = changes.clone();
            let latest = latest.clone();
            Callback::from(move |values: StatCounters| {
                changes.set(changes.get() + 1);
                latest.set(values);
            })
        };
        let handle = yew::Renderer::<StatsCounter>::with_root_and_props(
            root.clone(),
            StatsCounterProps {
                profile: &PROFILE,
                onchange,
            },
        )
        .render();

        TimeoutFuture::new(350).await;
        let seen = changes.get();
        assert!(seen > 0);
        assert!(latest.get().started());
        assert!(latest.get().get(StatKind::Technologies) < StatKind::Technologies.target());
        let shown = root
            .query_selector_all(".stat-number")
            .expect("query")
            .length();
        assert_eq!(shown, 3);

        handle.destroy();
        TimeoutFuture::new(600).await;

        assert_eq!(changes.get(), seen);
        root.remove();
    }
}
