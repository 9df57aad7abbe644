//! Subscription form view: locator entry, metadata confirmation with email
//! verification, success.

use crate::app::api::ApiCtx;
use crate::features::paper_form::state::{PaperFormState, Step};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastRequest;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaperFormProps {
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(PaperForm)]
pub(crate) fn paper_form(props: &PaperFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let form = use_state(PaperFormState::default);
    let busy = use_state(|| false);
    let sending = use_state(|| false);
    let sender_email = use_state(|| None as Option<String>);

    {
        let sender_email = sender_email.clone();
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    let client = api.client;
                    yew::platform::spawn_local(async move {
                        if let Ok(config) = client.public_email_config().await {
                            let trimmed = config.from_email.trim().to_string();
                            sender_email.set(if trimmed.is_empty() {
                                None
                            } else {
                                Some(trimmed)
                            });
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let Some(api) = api else { return html! {} };

    let on_fetch = {
        let form = form.clone();
        let busy = busy.clone();
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let request = form.preview_request();
            if request.openreview_url.is_empty() {
                return;
            }
            busy.set(true);
            let form = form.clone();
            let busy = busy.clone();
            let client = api.client.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.preview_paper(&request).await {
                    Ok(preview) => {
                        let mut next = (*form).clone();
                        next.apply_preview(preview);
                        form.set(next);
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
                busy.set(false);
            });
        })
    };

    let on_send_code = {
        let form = form.clone();
        let sending = sending.clone();
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let Some(request) = form.verification_request() else {
                return;
            };
            if *sending {
                return;
            }
            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let client = api.client.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.request_email_verification(&request).await {
                    Ok(response) => {
                        let mut next = (*form).clone();
                        next.mark_code_sent(response.expires_in_minutes);
                        form.set(next);
                        on_toast.emit(ToastRequest::success(
                            bundle.text("paper_form.toast_verification_sent"),
                            bundle.format(
                                "paper_form.toast_check_email",
                                &[("email", request.email.clone())],
                            ),
                        ));
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("paper_form.toast_verification_failed"),
                        err.message,
                    )),
                }
                sending.set(false);
            });
        })
    };

    let on_subscribe = {
        let form = form.clone();
        let busy = busy.clone();
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let Some(request) = form.subscribe_request() else {
                return;
            };
            if *busy {
                return;
            }
            busy.set(true);
            let form = form.clone();
            let busy = busy.clone();
            let client = api.client.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.add_paper(&request).await {
                    Ok(_) => {
                        let mut next = (*form).clone();
                        next.complete();
                        form.set(next);
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
                busy.set(false);
            });
        })
    };

    let edit_form = |mutate: fn(&mut PaperFormState, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                mutate(&mut next, input.value());
                form.set(next);
            }
        })
    };
    let on_locator_input = edit_form(|state, value| state.locator = value);
    let on_username_input = edit_form(|state, value| state.username = value);
    let on_password_input = edit_form(|state, value| state.password = value);
    let on_email_input = edit_form(PaperFormState::set_email);
    let on_code_input = edit_form(PaperFormState::set_code);

    let toggle_flag = |mutate: fn(&mut PaperFormState, bool)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                mutate(&mut next, input.checked());
                form.set(next);
            }
        })
    };
    let on_toggle_review = toggle_flag(|state, value| state.notify_on_review = value);
    let on_toggle_review_modified =
        toggle_flag(|state, value| state.notify_on_review_modified = value);
    let on_toggle_decision = toggle_flag(|state, value| state.notify_on_decision = value);

    let toggle_credentials = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.show_credentials = !next.show_credentials;
            form.set(next);
        })
    };
    let on_back = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.back_to_input();
            form.set(next);
        })
    };
    let on_reset = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.reset();
            form.set(next);
        })
    };
    let on_locator_keydown = {
        let on_fetch = on_fetch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_fetch.emit(());
            }
        })
    };

    let t = |key: &str| bundle.text(key);

    match form.step {
        Step::Input => html! {
            <div class="card form-card">
                <header class="card-header">
                    <h2>{t("paper_form.title")}</h2>
                    <span class="pill subtle">{bundle.format(
                        "common.step",
                        &[("current", "1".to_string()), ("total", "3".to_string())],
                    )}</span>
                </header>
                <p class="muted">{t("paper_form.description")}</p>
                <label class="stack">
                    <span>{t("paper_form.locator_label")}</span>
                    <input
                        type="text"
                        placeholder={t("paper_form.locator_placeholder")}
                        value={form.locator.clone()}
                        oninput={on_locator_input}
                        onkeydown={on_locator_keydown}
                    />
                </label>
                <div class="callout">
                    <div class="callout-head">
                        <span>{t("paper_form.credentials_title")}</span>
                        <span class="pill subtle">{t("common.optional")}</span>
                    </div>
                    <p class="muted">{t("paper_form.credentials_helper")}</p>
                    {if form.show_credentials {
                        html! {
                            <>
                                <label class="stack">
                                    <span>{t("paper_form.credentials_username")}</span>
                                    <input
                                        type="text"
                                        value={form.username.clone()}
                                        oninput={on_username_input}
                                    />
                                </label>
                                <label class="stack">
                                    <span>{t("paper_form.credentials_password")}</span>
                                    <input
                                        type="password"
                                        value={form.password.clone()}
                                        oninput={on_password_input}
                                    />
                                </label>
                            </>
                        }
                    } else { html! {} }}
                    <button type="button" class="ghost" onclick={toggle_credentials}>
                        {if form.show_credentials {
                            t("paper_form.credentials_hide")
                        } else {
                            t("paper_form.credentials_show")
                        }}
                    </button>
                </div>
                <button
                    type="button"
                    class="solid wide"
                    disabled={*busy || form.locator.trim().is_empty()}
                    onclick={{
                        let on_fetch = on_fetch.clone();
                        Callback::from(move |_| on_fetch.emit(()))
                    }}
                >
                    {if *busy { t("common.loading") } else { t("paper_form.fetch") }}
                </button>
            </div>
        },
        Step::Preview => {
            let Some(preview) = form.preview.clone() else {
                return html! {};
            };
            html! {
                <div class="card form-card">
                    <header class="card-header">
                        <div class="card-header-lead">
                            <button type="button" class="ghost" onclick={on_back}>{"←"}</button>
                            <div>
                                <h2>{t("paper_form.confirm_title")}</h2>
                                <p class="muted">{t("paper_form.confirm_subtitle")}</p>
                            </div>
                        </div>
                        <span class="pill subtle">{bundle.format(
                            "common.step",
                            &[("current", "2".to_string()), ("total", "3".to_string())],
                        )}</span>
                    </header>
                    <div class="summary">
                        <div class="summary-row">
                            <span class="muted">{t("common.paper_title")}</span>
                            <p>{preview.title.clone().unwrap_or_else(|| t("common.unknown_title"))}</p>
                        </div>
                        <div class="summary-row">
                            <span class="muted">{t("common.conference_venue")}</span>
                            <p>{preview.venue.clone().unwrap_or_else(|| t("common.unknown_venue"))}</p>
                        </div>
                        {match preview.authors.as_ref() {
                            Some(authors) if !authors.is_empty() => html! {
                                <div class="summary-row">
                                    <span class="muted">{t("common.authors")}</span>
                                    <p>{authors.join(", ")}</p>
                                </div>
                            },
                            _ => html! {},
                        }}
                        <div class="summary-row">
                            <span class="muted">{t("common.paper_id")}</span>
                            <p class="mono">{preview.openreview_id.clone()}</p>
                        </div>
                    </div>
                    {match &*sender_email {
                        Some(sender) => html! {
                            <div class="callout positive">
                                {bundle.format("paper_form.sender_configured", &[("email", sender.clone())])}
                            </div>
                        },
                        None => html! {
                            <div class="callout">{t("paper_form.sender_missing")}</div>
                        },
                    }}
                    <label class="stack">
                        <span>{t("paper_form.email_label")}</span>
                        <input
                            type="email"
                            placeholder={t("paper_form.email_placeholder")}
                            value={form.email.clone()}
                            oninput={on_email_input}
                        />
                    </label>
                    <button
                        type="button"
                        class="outline wide"
                        disabled={!form.can_request_code() || *sending}
                        onclick={{
                            let on_send_code = on_send_code.clone();
                            Callback::from(move |_| on_send_code.emit(()))
                        }}
                    >
                        {if *sending {
                            t("common.loading")
                        } else if form.verification_sent {
                            t("paper_form.verification_resend")
                        } else {
                            t("paper_form.verification_send")
                        }}
                    </button>
                    {match form.verification_expires_in {
                        Some(minutes) if form.verification_sent => html! {
                            <p class="muted">{bundle.format(
                                "paper_form.verification_expires",
                                &[("minutes", minutes.to_string())],
                            )}</p>
                        },
                        _ => html! {},
                    }}
                    {if form.verification_sent {
                        html! {
                            <label class="stack">
                                <span>{t("paper_form.verification_label")}</span>
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    placeholder={t("paper_form.verification_placeholder")}
                                    value={form.verification_code.clone()}
                                    oninput={on_code_input}
                                />
                            </label>
                        }
                    } else { html! {} }}
                    <fieldset class="stack">
                        <legend>{t("paper_form.preferences_title")}</legend>
                        <label class="check">
                            <input
                                type="checkbox"
                                checked={form.notify_on_review}
                                onchange={on_toggle_review}
                            />
                            <span>{t("paper_form.preferences_review")}</span>
                        </label>
                        <label class="check">
                            <input
                                type="checkbox"
                                checked={form.notify_on_review_modified}
                                onchange={on_toggle_review_modified}
                            />
                            <span>{t("paper_form.preferences_review_modified")}</span>
                        </label>
                        <label class="check">
                            <input
                                type="checkbox"
                                checked={form.notify_on_decision}
                                onchange={on_toggle_decision}
                            />
                            <span>{t("paper_form.preferences_decision")}</span>
                        </label>
                    </fieldset>
                    <button
                        type="button"
                        class="solid wide"
                        disabled={*busy || !form.can_subscribe()}
                        onclick={{
                            let on_subscribe = on_subscribe.clone();
                            Callback::from(move |_| on_subscribe.emit(()))
                        }}
                    >
                        {if *busy { t("common.loading") } else { t("paper_form.subscribe") }}
                    </button>
                </div>
            }
        }
        Step::Success => html! {
            <div class="card form-card success">
                <div class="success-mark">{"✓"}</div>
                <h3>{t("paper_form.success_title")}</h3>
                <p class="muted">{bundle.format(
                    "paper_form.success_body",
                    &[("email", form.email.clone())],
                )}</p>
                {match &*sender_email {
                    Some(sender) => html! {
                        <p class="muted">{bundle.format(
                            "paper_form.success_sender",
                            &[("email", sender.clone())],
                        )}</p>
                    },
                    None => html! {},
                }}
                <p class="strong">{form
                    .preview
                    .as_ref()
                    .map(|preview| {
                        preview
                            .title
                            .clone()
                            .unwrap_or_else(|| preview.openreview_id.clone())
                    })
                    .unwrap_or_default()}</p>
                <button type="button" class="outline" onclick={on_reset}>
                    {t("paper_form.monitor_another")}
                </button>
            </div>
        },
    }
}
