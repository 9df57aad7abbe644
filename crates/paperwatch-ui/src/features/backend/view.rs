//! Backend selector view.

use crate::app::api::ApiCtx;
use crate::app::preferences;
use crate::core::api_base::ApiMode;
use crate::core::session;
use crate::core::store::AppStore;
use crate::features::backend::state::BackendSelectorState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastRequest;
use crate::services::api::ApiClient;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct BackendSelectorProps {
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(BackendSelector)]
pub(crate) fn backend_selector(props: &BackendSelectorProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let selector = use_state(|| BackendSelectorState::from_config(preferences::load_api_config()));
    let dispatch = Dispatch::<AppStore>::new();

    let Some(api) = api else { return html! {} };

    let format_base = {
        let bundle = bundle.clone();
        move |value: &str| {
            if value.starts_with('/') {
                bundle.format("backend.same_origin", &[("base", value.to_string())])
            } else {
                value.to_string()
            }
        }
    };

    let apply_official = {
        let selector = selector.clone();
        let api = api.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        let format_base = format_base.clone();
        Callback::from(move |_| {
            let config = preferences::set_api_mode(ApiMode::Official);
            api.client.set_base(config.base.clone());
            dispatch.reduce_mut(|store| {
                store.backend = config.clone();
                store.session.logged_in = session::is_logged_in();
            });
            let mut next = (*selector).clone();
            next.refresh(config.clone());
            selector.set(next);
            on_toast.emit(ToastRequest::success(
                bundle.text("backend.toast_official"),
                bundle.format("backend.toast_base_set", &[("base", format_base(&config.base))]),
            ));
        })
    };

    let select_mode = {
        let selector = selector.clone();
        let apply_official = apply_official.clone();
        Callback::from(move |mode: ApiMode| {
            if mode == ApiMode::Official {
                apply_official.emit(());
                return;
            }
            let mut next = (*selector).clone();
            next.select(mode);
            selector.set(next);
        })
    };

    let confirm_custom = {
        let selector = selector.clone();
        let api = api.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        let format_base = format_base.clone();
        Callback::from(move |_| {
            if selector.checking {
                return;
            }
            let mut next = (*selector).clone();
            let Some(normalized) = next.begin_check() else {
                selector.set(next);
                return;
            };
            selector.set(next);
            let selector = selector.clone();
            let api = api.clone();
            let dispatch = dispatch.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            let format_base = format_base.clone();
            yew::platform::spawn_local(async move {
                let status = ApiClient::check_health(&normalized).await;
                let mut next = (*selector).clone();
                if !next.finish_check(status) {
                    selector.set(next);
                    return;
                }
                match preferences::set_custom_api_base(&normalized) {
                    Some(config) => {
                        api.client.set_base(config.base.clone());
                        dispatch.reduce_mut(|store| {
                            store.backend = config.clone();
                            store.session.logged_in = session::is_logged_in();
                        });
                        next.refresh(config.clone());
                        selector.set(next);
                        on_toast.emit(ToastRequest::success(
                            bundle.text("backend.toast_custom"),
                            bundle.format(
                                "backend.toast_base_set",
                                &[("base", format_base(&config.base))],
                            ),
                        ));
                    }
                    None => selector.set(next),
                }
            });
        })
    };

    let on_input = {
        let selector = selector.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*selector).clone();
                next.set_input(input.value());
                selector.set(next);
            }
        })
    };
    let on_keydown = {
        let confirm_custom = confirm_custom.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                confirm_custom.emit(());
            }
        })
    };

    let t = |key: &str| bundle.text(key);
    let official_selected = selector.selected == ApiMode::Official;

    html! {
        <div class="card">
            <header class="card-header">
                <h2>{t("backend.title")}</h2>
            </header>
            <p class="muted">{t("backend.description")}</p>
            <div class="tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class={classes!("tab", official_selected.then_some("active"))}
                    aria-selected={official_selected.to_string()}
                    onclick={{
                        let select_mode = select_mode.clone();
                        Callback::from(move |_| select_mode.emit(ApiMode::Official))
                    }}
                >
                    {t("backend.tab_official")}
                </button>
                <button
                    type="button"
                    role="tab"
                    class={classes!("tab", (!official_selected).then_some("active"))}
                    aria-selected={(!official_selected).to_string()}
                    onclick={{
                        let select_mode = select_mode.clone();
                        Callback::from(move |_| select_mode.emit(ApiMode::Custom))
                    }}
                >
                    {t("backend.tab_custom")}
                </button>
            </div>
            {if selector.selected == ApiMode::Custom {
                html! {
                    <div class="stack">
                        <label class="stack">
                            <span>{t("backend.custom_label")}</span>
                            <input
                                type="text"
                                placeholder={t("backend.custom_placeholder")}
                                value={selector.custom_input.clone()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                            />
                        </label>
                        <p class="muted">{t("backend.custom_help")}</p>
                        {match selector.normalized_preview() {
                            Some(normalized) => html! {
                                <p class="muted">
                                    {t("backend.custom_normalized")}
                                    {" "}
                                    <span class="mono">{normalized}</span>
                                </p>
                            },
                            None => html! {},
                        }}
                        <div class="callout warning">{t("backend.custom_warning")}</div>
                        {match selector.error {
                            Some(error) => html! {
                                <p class="error-text">{error.message(&bundle)}</p>
                            },
                            None => html! {},
                        }}
                        <button
                            type="button"
                            class="solid"
                            disabled={selector.checking}
                            onclick={{
                                let confirm_custom = confirm_custom.clone();
                                Callback::from(move |_| confirm_custom.emit(()))
                            }}
                        >
                            {if selector.checking {
                                t("common.checking")
                            } else {
                                t("common.confirm")
                            }}
                        </button>
                    </div>
                }
            } else { html! {} }}
            <div class="muted footnote">
                {t("backend.current_base")}
                {" "}
                <span class="mono">{format_base(&selector.config.base)}</span>
                {if selector.config.mode == ApiMode::Official {
                    html! {
                        <span class="block">
                            {t("backend.official_base")}
                            {" "}
                            {format_base(&selector.config.official_base)}
                        </span>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
