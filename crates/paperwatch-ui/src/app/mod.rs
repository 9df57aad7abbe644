//! Application shell: routing, locale wiring, shared stores, and boot.

use crate::app::api::ApiCtx;
use crate::components::language_switch::LanguageSwitch;
use crate::components::toast::ToastHost;
use crate::core::session;
use crate::core::store::AppStore;
use crate::features::admin::AdminPage;
use crate::features::backend::BackendSelector;
use crate::features::paper_form::PaperForm;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::models::{Toast, ToastRequest};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod routes;
mod seo;

pub(crate) use routes::Route;

const MAX_TOASTS: usize = 4;

#[function_component(PaperwatchApp)]
fn paperwatch_app() -> Html {
    let locale = use_state(preferences::load_locale);
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(preferences::load_api_config().base), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                preferences::hydrate_session();
                let config = preferences::load_api_config();
                dispatch.reduce_mut(|store| {
                    store.session.logged_in = session::is_logged_in();
                    store.backend = config;
                });
                || ()
            },
            (),
        );
    }
    {
        use_effect_with_deps(
            move |locale| {
                preferences::persist_locale(**locale);
                || ()
            },
            locale.clone(),
        );
    }

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };
    let push_toast = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |request: ToastRequest| {
            let id = *toast_id + 1;
            toast_id.set(id);
            let mut list = (*toasts).clone();
            list.push(Toast {
                id,
                title: request.title,
                message: request.message,
                kind: request.kind,
            });
            if list.len() > MAX_TOASTS {
                let drain = list.len() - MAX_TOASTS;
                list.drain(0..drain);
            }
            toasts.set(list);
        })
    };

    let locale_value = *locale;
    let push_toast_routes = push_toast.clone();
    let set_locale_routes = set_locale.clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <SeoManager locale={locale_value} />
                    <Switch<Route> render={move |route| match route {
                        Route::Home | Route::NotFound => html! {
                            <HomePage
                                locale={locale_value}
                                on_select_locale={set_locale_routes.clone()}
                                on_toast={push_toast_routes.clone()}
                            />
                        },
                        Route::Admin => html! {
                            <AdminPage
                                locale={locale_value}
                                on_select_locale={set_locale_routes.clone()}
                                on_toast={push_toast_routes.clone()}
                            />
                        },
                    }} />
                </BrowserRouter>
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct SeoManagerProps {
    locale: LocaleCode,
}

/// Reacts to locale and route changes by rewriting document head metadata
/// and keeping the `lang` query parameter in sync.
#[function_component(SeoManager)]
fn seo_manager(props: &SeoManagerProps) -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |(_, locale): &(Option<Route>, LocaleCode)| {
            let bundle = TranslationBundle::new(*locale);
            seo::apply_head(&bundle, *locale);
            seo::sync_lang_query(*locale);
            || ()
        },
        (route, props.locale),
    );
    html! {}
}

#[derive(Properties, PartialEq)]
struct HomePageProps {
    locale: LocaleCode,
    on_select_locale: Callback<LocaleCode>,
    on_toast: Callback<ToastRequest>,
}

#[function_component(HomePage)]
fn home_page(props: &HomePageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key);

    html! {
        <div class="page">
            <header class="topbar">
                <div class="topbar-lead">
                    <span class="brand-badge">{"PW"}</span>
                    <h1>{"Paperwatch"}</h1>
                </div>
                <div class="topbar-actions">
                    <LanguageSwitch
                        locale={props.locale}
                        on_select={props.on_select_locale.clone()}
                    />
                    <Link<Route> to={Route::Admin} classes="pill">
                        {t("nav.admin")}
                    </Link<Route>>
                </div>
            </header>
            <main class="content">
                <section class="hero">
                    <span class="pill subtle">{t("home.hero_badge")}</span>
                    <h2>{t("home.hero_title")}</h2>
                    <p class="muted">{t("home.hero_subtitle")}</p>
                </section>
                <section class="steps">
                    <div class="step">
                        <h3>{t("home.step1_title")}</h3>
                        <p class="muted">{t("home.step1_body")}</p>
                    </div>
                    <div class="step">
                        <h3>{t("home.step2_title")}</h3>
                        <p class="muted">{t("home.step2_body")}</p>
                    </div>
                    <div class="step">
                        <h3>{t("home.step3_title")}</h3>
                        <p class="muted">{t("home.step3_body")}</p>
                    </div>
                </section>
                <section class="forms">
                    <PaperForm on_toast={props.on_toast.clone()} />
                    <BackendSelector on_toast={props.on_toast.clone()} />
                </section>
            </main>
            <footer class="footer muted">{t("home.footer_tagline")}</footer>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PaperwatchApp>::with_root(root).render();
    } else {
        yew::Renderer::<PaperwatchApp>::new().render();
    }
}
