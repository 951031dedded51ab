use crate::app::bootstrap::use_site_config;
use crate::app::use_app_context;
use crate::components::battle_menu::BattleMenu;
use pokefolio_core::{BattleOption, SiteConfiguration};
use std::rc::Rc;
use yew::prelude::*;

/// How long the intro line stays up before the menu unlocks.
pub const INTRO_MS: u32 = 2_500;

#[must_use]
pub fn intro_line(trainer_name: &str) -> String {
    format!("A wild {trainer_name} appeared!")
}

#[derive(Properties, PartialEq, Clone)]
pub struct BattleScreenProps {
    pub site: Option<Rc<SiteConfiguration>>,
    pub options: Rc<Vec<BattleOption>>,
    pub show_intro: bool,
    #[prop_or_default]
    pub animate_entrance: bool,
    pub on_intro_done: Callback<()>,
}

/// Landing screen: the trainer, the intro line and the battle menu.
#[function_component(BattleScreen)]
pub fn battle_screen(p: &BattleScreenProps) -> Html {
    let trainer = p
        .site
        .as_ref()
        .map_or_else(|| "???".to_string(), |site| site.trainer_name.clone());
    let advance = p.on_intro_done.reform(|_: MouseEvent| ());

    html! {
        <section class="battle-screen">
            <div class="battle-field">
                <div class="battle-field__trainer">
                    <h1 class="trainer-name">{ trainer.clone() }</h1>
                    <div class="trainer-sprite" aria-hidden="true"></div>
                </div>
                <div class="battle-field__player" aria-hidden="true"></div>
            </div>
            <div class="battle-dialog">
                if p.show_intro {
                    <button type="button" class="battle-dialog__text battle-dialog__text--intro" onclick={advance}>
                        { intro_line(&trainer) }
                        <span class="battle-dialog__next" aria-hidden="true">{ "▼" }</span>
                    </button>
                } else {
                    <p class="battle-dialog__text">{ "What will you do?" }</p>
                }
                <BattleMenu
                    options={p.options.clone()}
                    disabled={p.show_intro}
                    animate_entrance={p.animate_entrance}
                />
            </div>
        </section>
    }
}

#[function_component(BattlePage)]
pub fn battle_page() -> Html {
    let ctx = use_app_context();
    let site = use_site_config(&ctx.source.0);
    let options = use_memo(site.clone(), |site| {
        site.as_ref()
            .map(|site| site.battle_options.clone())
            .unwrap_or_default()
    });

    let first_visit = !ctx.intro.played();
    let show_intro = use_state_eq(|| first_visit);
    // Captured on mount: later visits skip the entrance animation.
    let animate_entrance = *use_state(|| first_visit);

    let on_intro_done = {
        let show_intro = show_intro.clone();
        let intro = ctx.intro.clone();
        Callback::from(move |()| {
            intro.mark_played();
            show_intro.set(false);
        })
    };
    // Runs even when the site never loads, so the intro cannot get stuck.
    use_intro_timer(*show_intro, on_intro_done.clone());

    html! {
        <BattleScreen
            site={site}
            options={options}
            show_intro={*show_intro}
            animate_entrance={animate_entrance && !*show_intro}
            on_intro_done={on_intro_done}
        />
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_intro_timer(running: bool, on_done: Callback<()>) {
    use_effect_with(running, move |running| {
        if *running {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = crate::dom::sleep_ms(INTRO_MS).await;
                on_done.emit(());
            });
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_intro_timer(running: bool, on_done: Callback<()>) {
    let _ = (running, on_done);
}

#[cfg(test)]
mod tests {
    use super::intro_line;

    #[test]
    fn intro_names_the_trainer() {
        assert_eq!(intro_line("JAY"), "A wild JAY appeared!");
    }
}
