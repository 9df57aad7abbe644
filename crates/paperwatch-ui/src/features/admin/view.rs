//! Admin dashboard page: login gate, tabs, and data loading.

use crate::app::api::ApiCtx;
use crate::app::preferences;
use crate::app::routes::Route;
use crate::components::language_switch::LanguageSwitch;
use crate::core::api_base::ApiMode;
use crate::core::store::AppStore;
use crate::features::admin::config::{ConfigPanel, TestEmailPanel};
use crate::features::admin::login::AdminLogin;
use crate::features::admin::state::ConfigFormState;
use crate::features::admin::subscribers::SubscriberList;
use crate::features::papers::PaperList;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::models::ToastRequest;
use gloo::dialogs::confirm;
use paperwatch_api_models::Subscriber;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Dashboard tab selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Papers,
    Subscribers,
    Config,
}

#[derive(Properties, PartialEq)]
pub(crate) struct AdminPageProps {
    pub locale: LocaleCode,
    pub on_select_locale: Callback<LocaleCode>,
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(AdminPage)]
pub(crate) fn admin_page(props: &AdminPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let logged_in = use_selector(|store: &AppStore| store.session.logged_in);
    let backend = use_selector(|store: &AppStore| store.backend.clone());
    let subscribers = use_state(Vec::<Subscriber>::new);
    let config_form = use_state(ConfigFormState::default);
    let saving = use_state(|| false);
    let tab = use_state(|| AdminTab::Papers);

    let load_data = {
        let subscribers = subscribers.clone();
        let config_form = config_form.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let Some(api) = api.clone() else { return };
            let subscribers = subscribers.clone();
            let config_form = config_form.clone();
            yew::platform::spawn_local(async move {
                if let Ok(list) = api.client.subscribers().await {
                    subscribers.set(list);
                }
                if let Ok(config) = api.client.config().await {
                    config_form.set(ConfigFormState::from_config(config));
                }
            });
        })
    };

    {
        let load_data = load_data.clone();
        use_effect_with_deps(
            move |logged_in| {
                if **logged_in {
                    load_data.emit(());
                }
                || ()
            },
            logged_in.clone(),
        );
    }

    let Some(api) = api else { return html! {} };

    let logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            preferences::clear_admin_token();
            dispatch.reduce_mut(|store| store.session.logged_in = false);
        })
    };

    let delete_subscriber = {
        let api = api.clone();
        let load_data = load_data.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |id: i64| {
            if !confirm(&bundle.text("admin.subscribers_confirm_delete")) {
                return;
            }
            let client = api.client.clone();
            let load_data = load_data.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.delete_subscriber(id).await {
                    Ok(_) => {
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("admin.toast_subscriber_deleted"),
                        ));
                        load_data.emit(());
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
            });
        })
    };

    let reset_subscriber = {
        let api = api.clone();
        let load_data = load_data.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |id: i64| {
            let client = api.client.clone();
            let load_data = load_data.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.reset_subscriber_notifications(id).await {
                    Ok(_) => {
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("admin.toast_notification_reset"),
                        ));
                        load_data.emit(());
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
            });
        })
    };

    let save_config = {
        let config_form = config_form.clone();
        let saving = saving.clone();
        let api = api.clone();
        let load_data = load_data.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let patch = match config_form.to_update() {
                Ok(patch) => patch,
                Err(message) => {
                    on_toast.emit(ToastRequest::error(bundle.text("common.error"), message));
                    return;
                }
            };
            if patch.is_empty() {
                on_toast.emit(ToastRequest::info(
                    bundle.text("common.success"),
                    bundle.text("admin.toast_no_changes"),
                ));
                return;
            }
            saving.set(true);
            let saving = saving.clone();
            let client = api.client.clone();
            let load_data = load_data.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.update_config(&patch).await {
                    Ok(_) => {
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("admin.toast_config_saved"),
                        ));
                        load_data.emit(());
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
                saving.set(false);
            });
        })
    };

    let on_config_change = {
        let config_form = config_form.clone();
        Callback::from(move |next: ConfigFormState| config_form.set(next))
    };

    let t = |key: &str| bundle.text(key);

    if !*logged_in {
        return html! {
            <div class="page centered-page">
                <div class="page-corner">
                    <LanguageSwitch
                        locale={props.locale}
                        on_select={props.on_select_locale.clone()}
                    />
                </div>
                <AdminLogin on_toast={props.on_toast.clone()} />
            </div>
        };
    }

    let backend_label = match backend.mode {
        ApiMode::Official => t("nav.official_backend"),
        ApiMode::Custom => t("nav.custom_backend"),
    };
    let select_tab = |target: AdminTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(target))
    };
    let tab_class = |target: AdminTab| {
        classes!("tab", (*tab == target).then_some("active"))
    };

    html! {
        <div class="page">
            <header class="topbar">
                <div class="topbar-lead">
                    <span class="brand-badge">{"PW"}</span>
                    <div>
                        <p class="muted overline">{t("nav.control")}</p>
                        <h1>{t("nav.admin_dashboard")}</h1>
                    </div>
                </div>
                <div class="topbar-actions">
                    <LanguageSwitch
                        locale={props.locale}
                        on_select={props.on_select_locale.clone()}
                    />
                    <span class="pill subtle">
                        {backend_label}
                        {" · "}
                        <span class="mono">{backend.base.clone()}</span>
                    </span>
                    <Link<Route> to={Route::Home} classes="pill">
                        {t("nav.home")}
                    </Link<Route>>
                    <button type="button" class="pill" onclick={logout}>
                        {t("nav.logout")}
                    </button>
                </div>
            </header>
            <main class="content">
                <div class="tabs" role="tablist">
                    <button type="button" role="tab" class={tab_class(AdminTab::Papers)}
                        onclick={select_tab(AdminTab::Papers)}>
                        {t("admin.tabs_papers")}
                    </button>
                    <button type="button" role="tab" class={tab_class(AdminTab::Subscribers)}
                        onclick={select_tab(AdminTab::Subscribers)}>
                        {t("admin.tabs_subscribers")}
                    </button>
                    <button type="button" role="tab" class={tab_class(AdminTab::Config)}
                        onclick={select_tab(AdminTab::Config)}>
                        {t("admin.tabs_config")}
                    </button>
                </div>
                {match *tab {
                    AdminTab::Papers => html! {
                        <PaperList
                            on_refresh={load_data.clone()}
                            on_toast={props.on_toast.clone()}
                        />
                    },
                    AdminTab::Subscribers => html! {
                        <SubscriberList
                            subscribers={(*subscribers).clone()}
                            on_delete={delete_subscriber}
                            on_reset={reset_subscriber}
                        />
                    },
                    AdminTab::Config => html! {
                        <div class="grid two">
                            <ConfigPanel
                                form={(*config_form).clone()}
                                on_change={on_config_change}
                                on_save={save_config}
                                saving={*saving}
                            />
                            <TestEmailPanel on_toast={props.on_toast.clone()} />
                        </div>
                    },
                }}
            </main>
        </div>
    }
}
