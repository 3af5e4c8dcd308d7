/// Popup UI for Theme Sleuth

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::PRELOADER_DELAY_MS;
use crate::render::{RenderModel, render_model};
use crate::ui::bridge::{inspect_active_tab, wait};
use crate::ui::components::ResultPanel;

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    Ready(RenderModel),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);

    // Inspect the active tab once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let inspection = inspect_active_tab().await;
                let model = render_model(&inspection.outcome, &inspection.page_url);

                // Keep the preloader up long enough to be seen
                wait(PRELOADER_DELAY_MS).await;
                state.set(PopupState::Ready(model));
            });
            || ()
        });
    }

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Theme Sleuth"}</h1>

            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Inspecting page..."}</p>
                    </div>
                },
                PopupState::Ready(model) => html! {
                    <div class="content visible">
                        <ResultPanel model={model.clone()} />
                    </div>
                },
            }}

            <p class="footer-popup">
                {"Theme Sleuth v0.1.0"}
            </p>
        </div>
    }
}
