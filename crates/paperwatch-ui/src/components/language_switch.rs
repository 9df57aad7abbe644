//! Locale toggle shown in page headers.
//!
//! # Design
//! - The component only renders and emits; persistence and head updates are
//!   the app shell's job.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageSwitchProps {
    pub locale: LocaleCode,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LanguageSwitch)]
pub(crate) fn language_switch(props: &LanguageSwitchProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let next = props.locale.toggled();
    let on_select = props.on_select.clone();
    let onclick = Callback::from(move |_| on_select.emit(next));

    html! {
        <button
            type="button"
            class="pill"
            aria-label={bundle.text("lang.switch_aria")}
            onclick={onclick}
        >
            {bundle.text("lang.switch")}
        </button>
    }
}
