//! Admin login card.

use crate::app::api::ApiCtx;
use crate::app::preferences;
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastRequest;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct AdminLoginProps {
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(AdminLogin)]
pub(crate) fn admin_login(props: &AdminLoginProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();

    let Some(api) = api else { return html! {} };

    let submit = {
        let password = password.clone();
        let busy = busy.clone();
        let api = api.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            if *busy || password.is_empty() {
                return;
            }
            busy.set(true);
            let password_value = (*password).clone();
            let busy = busy.clone();
            let client = api.client.clone();
            let dispatch = dispatch.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.login(&password_value).await {
                    Ok(response) => {
                        preferences::persist_admin_token(&response.token);
                        dispatch.reduce_mut(|store| store.session.logged_in = true);
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("admin_login.toast_success"),
                        ));
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("admin_login.toast_failed"),
                        err.message,
                    )),
                }
                busy.set(false);
            });
        })
    };

    let on_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let t = |key: &str| bundle.text(key);

    html! {
        <div class="card form-card narrow">
            <header class="card-header centered">
                <h2>{t("admin_login.title")}</h2>
            </header>
            <p class="muted centered">{t("admin_login.description")}</p>
            <label class="stack">
                <span>{t("admin_login.password_label")}</span>
                <input
                    type="password"
                    placeholder={t("admin_login.password_placeholder")}
                    value={(*password).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
            </label>
            <button
                type="button"
                class="solid wide"
                disabled={*busy || password.is_empty()}
                onclick={{
                    let submit = submit.clone();
                    Callback::from(move |_| submit.emit(()))
                }}
            >
                {if *busy { t("common.loading") } else { t("admin_login.submit") }}
            </button>
        </div>
    }
}
