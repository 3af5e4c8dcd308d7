/// Reusable UI components for the result panel

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::render::{RenderModel, ThemeCard};
use crate::ui::bridge::open_in_new_tab;

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub url: String,
    pub label: String,
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
}

/// Button that opens its URL in a new tab through the extension API
#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let onclick = {
        let url = props.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let url = url.clone();
            spawn_local(async move {
                open_in_new_tab(url).await;
            });
        })
    };

    html! {
        <Button onclick={onclick} variant={props.variant} block={true}>
            {props.label.clone()}
        </Button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeCardViewProps {
    pub card: ThemeCard,
}

#[function_component(ThemeCardView)]
pub fn theme_card_view(props: &ThemeCardViewProps) -> Html {
    let card = &props.card;

    html! {
        <div class="result-card">
            <div class="theme-label">{&card.label}</div>
            <div class="theme-name">{&card.name}</div>
            <div class="flex-column-gap">
                <LinkButton
                    url={card.links.shopify_store_url.clone()}
                    label={"View on Shopify Store"}
                    variant={ButtonVariant::Primary}
                />
                <LinkButton
                    url={card.links.themeforest_url.clone()}
                    label={"Search on ThemeForest"}
                    variant={ButtonVariant::Secondary}
                />
            </div>
            if let Some(note) = &card.note {
                <div class="fallback-note">{note}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub model: RenderModel,
}

/// Renders any [`RenderModel`]
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    match &props.model {
        RenderModel::Error { title, hint } => html! {
            <Alert r#type={AlertType::Danger} title={title.clone()} inline={true}>
                {hint.clone()}
            </Alert>
        },
        RenderModel::Info { message } => html! {
            <Alert r#type={AlertType::Info} title={message.clone()} inline={true}>
            </Alert>
        },
        RenderModel::Theme(card) => html! {
            <ThemeCardView card={card.clone()} />
        },
    }
}
