//! Configuration and test-email panels.

use crate::app::api::ApiCtx;
use crate::features::admin::state::ConfigFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfigPanelProps {
    pub form: ConfigFormState,
    pub on_change: Callback<ConfigFormState>,
    pub on_save: Callback<()>,
    pub saving: bool,
}

#[function_component(ConfigPanel)]
pub(crate) fn config_panel(props: &ConfigPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key);

    let edit = |mutate: fn(&mut ConfigFormState, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = form.clone();
                mutate(&mut next, input.value());
                on_change.emit(next);
            }
        })
    };

    let field = |label_key: &str,
                 help_key: Option<&str>,
                 input_type: &str,
                 placeholder: Option<String>,
                 value: String,
                 oninput: Callback<InputEvent>| {
        html! {
            <label class="stack">
                <span>{t(label_key)}</span>
                <input
                    type={input_type.to_string()}
                    placeholder={placeholder.unwrap_or_default()}
                    value={value}
                    oninput={oninput}
                />
                {match help_key {
                    Some(key) => html! { <small class="muted">{t(key)}</small> },
                    None => html! {},
                }}
            </label>
        }
    };

    html! {
        <div class="card">
            <header class="card-header">
                <h2>{t("admin.config_title")}</h2>
            </header>
            <div class="stack">
                {field(
                    "admin.config_check_interval",
                    Some("admin.config_check_interval_help"),
                    "number",
                    None,
                    props.form.check_interval.clone(),
                    edit(|form, value| form.check_interval = value),
                )}
                {field(
                    "admin.config_review_mod_interval",
                    Some("admin.config_review_mod_interval_help"),
                    "number",
                    None,
                    props.form.review_mod_check_interval.clone(),
                    edit(|form, value| form.review_mod_check_interval = value),
                )}
                {field(
                    "admin.config_review_mod_gap",
                    Some("admin.config_review_mod_gap_help"),
                    "number",
                    None,
                    props.form.review_mod_request_gap_seconds.clone(),
                    edit(|form, value| form.review_mod_request_gap_seconds = value),
                )}
                <h3 class="section-title">{t("admin.config_smtp_title")}</h3>
                {field(
                    "admin.config_smtp_host",
                    None,
                    "text",
                    None,
                    props.form.smtp_host.clone(),
                    edit(|form, value| form.smtp_host = value),
                )}
                {field(
                    "admin.config_smtp_port",
                    None,
                    "number",
                    None,
                    props.form.smtp_port.clone(),
                    edit(|form, value| form.smtp_port = value),
                )}
                {field(
                    "admin.config_smtp_user",
                    None,
                    "text",
                    None,
                    props.form.smtp_user.clone(),
                    edit(|form, value| form.smtp_user = value),
                )}
                {field(
                    "admin.config_smtp_password",
                    None,
                    "password",
                    Some(t("admin.config_smtp_password_placeholder")),
                    props.form.smtp_password.clone(),
                    edit(|form, value| form.smtp_password = value),
                )}
                {field(
                    "admin.config_from_email",
                    None,
                    "email",
                    None,
                    props.form.from_email.clone(),
                    edit(|form, value| form.from_email = value),
                )}
                {field(
                    "admin.config_from_name",
                    None,
                    "text",
                    Some(t("admin.config_from_name_placeholder")),
                    props.form.from_name.clone(),
                    edit(|form, value| form.from_name = value),
                )}
                <button
                    type="button"
                    class="solid wide"
                    disabled={props.saving}
                    onclick={{
                        let on_save = props.on_save.clone();
                        Callback::from(move |_| on_save.emit(()))
                    }}
                >
                    {if props.saving { t("common.loading") } else { t("admin.config_save") }}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TestEmailPanelProps {
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(TestEmailPanel)]
pub(crate) fn test_email_panel(props: &TestEmailPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let recipient = use_state(String::new);
    let sending = use_state(|| false);

    let Some(api) = api else { return html! {} };

    let on_input = {
        let recipient = recipient.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                recipient.set(input.value());
            }
        })
    };

    let on_send = {
        let recipient = recipient.clone();
        let sending = sending.clone();
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let address = recipient.trim().to_string();
            if address.is_empty() {
                on_toast.emit(ToastRequest::error(
                    bundle.text("common.error"),
                    bundle.text("admin.toast_email_required"),
                ));
                return;
            }
            if *sending {
                return;
            }
            sending.set(true);
            let sending = sending.clone();
            let client = api.client.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.send_test_email(&address).await {
                    Ok(_) => on_toast.emit(ToastRequest::success(
                        bundle.text("common.success"),
                        bundle.format("admin.toast_test_email_sent", &[("email", address)]),
                    )),
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
                sending.set(false);
            });
        })
    };

    let t = |key: &str| bundle.text(key);

    html! {
        <div class="card">
            <header class="card-header">
                <h2>{t("admin.test_title")}</h2>
            </header>
            <p class="muted">{t("admin.test_description")}</p>
            <label class="stack">
                <span>{t("admin.test_recipient")}</span>
                <input
                    type="email"
                    placeholder={t("admin.test_placeholder")}
                    value={(*recipient).clone()}
                    oninput={on_input}
                />
            </label>
            <button
                type="button"
                class="solid wide"
                disabled={*sending || recipient.trim().is_empty()}
                onclick={{
                    let on_send = on_send.clone();
                    Callback::from(move |_| on_send.emit(()))
                }}
            >
                {if *sending { t("common.loading") } else { t("admin.test_send") }}
            </button>
            <p class="muted footnote">{t("admin.test_helper")}</p>
        </div>
    }
}
