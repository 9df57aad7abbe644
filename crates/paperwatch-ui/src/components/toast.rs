//! Transient toast notifications.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dismiss_label = bundle.text("toast.dismiss");
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut handles = Vec::new();
                for toast in list {
                    let on_dismiss = on_dismiss.clone();
                    let id = toast.id;
                    handles.push(Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(id)));
                }
                move || drop(handles)
            },
            toasts,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| {
                render_toast(toast, props.on_dismiss.clone(), dismiss_label.clone())
            })}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>, dismiss_label: String) -> Html {
    let kind_class = match toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <div class="toast-body">
                <strong>{toast.title.clone()}</strong>
                <span>{toast.message.clone()}</span>
            </div>
            <button class="ghost" aria-label={dismiss_label} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
