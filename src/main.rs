mod app_router;
mod boot;
mod counter_view;
mod profile_view;
mod scroll_effects;

use folio_core::host::APP_ROOT_ID;
use folio_core::{EffectsMode, PROFILE};
use gloo::console;
use yew::prelude::*;

use crate::boot::BootPhase;
use crate::counter_view::StatsCounter;
use crate::profile_view::ProfileView;
use crate::scroll_effects::ScrollEffects;

#[function_component(App)]
fn app() -> Html {
    let config = app_router::init_config();

    use_effect_with((), move |_| {
        let effects = match config.effects {
            EffectsMode::On => {
                boot::enter(BootPhase::Effects);
                match ScrollEffects::install() {
                    Ok(effects) => Some(effects),
                    Err(err) => {
                        console::error!("effects: install failed", err.to_string());
                        boot::fail_host(&err);
                        None
                    }
                }
            }
            EffectsMode::Off => None,
        };
        boot::ready();
        move || drop(effects)
    });

    html! {
        <>
            if config.view.shows_profile() {
                <ProfileView profile={&PROFILE} />
            }
            if config.view.shows_counter() {
                <section id="stats" class="stats-section">
                    <StatsCounter profile={&PROFILE} />
                </section>
            }
        </>
    }
}

fn main() {
    boot::enter(BootPhase::Render);
    let root = gloo::utils::document().get_element_by_id(APP_ROOT_ID);
    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
