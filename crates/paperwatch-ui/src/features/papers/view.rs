//! Monitored-paper list view for the admin dashboard.

use crate::app::api::ApiCtx;
use crate::core::logic::{format_timestamp, forum_url};
use crate::features::papers::state::{status_badge_class, status_label_key, venue_groups};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::ToastRequest;
use gloo::dialogs::{confirm, prompt};
use paperwatch_api_models::{Paper, PaperUpdate};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaperListProps {
    /// Invoked after a mutation so the parent can refresh dependent views.
    pub on_refresh: Callback<()>,
    pub on_toast: Callback<ToastRequest>,
}

#[function_component(PaperList)]
pub(crate) fn paper_list(props: &PaperListProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let papers = use_state(Vec::<Paper>::new);
    let loading = use_state(|| true);

    let fetch_papers = {
        let papers = papers.clone();
        let loading = loading.clone();
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let Some(api) = api.clone() else { return };
            loading.set(true);
            let papers = papers.clone();
            let loading = loading.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match api.client.papers().await {
                    Ok(list) => papers.set(list),
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
                loading.set(false);
            });
        })
    };

    {
        let fetch_papers = fetch_papers.clone();
        use_effect_with_deps(
            move |_| {
                fetch_papers.emit(());
                || ()
            },
            (),
        );
    }

    let Some(api) = api else { return html! {} };

    let on_delete = {
        let api = api.clone();
        let fetch_papers = fetch_papers.clone();
        let on_refresh = props.on_refresh.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |id: i64| {
            if !confirm(&bundle.text("paper_list.confirm_delete")) {
                return;
            }
            let client = api.client.clone();
            let fetch_papers = fetch_papers.clone();
            let on_refresh = on_refresh.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.delete_paper(id).await {
                    Ok(_) => {
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("paper_list.toast_deleted"),
                        ));
                        fetch_papers.emit(());
                        on_refresh.emit(());
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
            });
        })
    };

    let on_rename = {
        let api = api.clone();
        let fetch_papers = fetch_papers.clone();
        let on_refresh = props.on_refresh.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |(id, current): (i64, String)| {
            let Some(title) = prompt(&bundle.text("paper_list.rename_prompt"), Some(&current))
            else {
                return;
            };
            let title = title.trim().to_string();
            if title.is_empty() || title == current {
                return;
            }
            let client = api.client.clone();
            let fetch_papers = fetch_papers.clone();
            let on_refresh = on_refresh.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                let update = PaperUpdate {
                    title: Some(title),
                    venue: None,
                };
                match client.update_paper(id, &update).await {
                    Ok(_) => {
                        on_toast.emit(ToastRequest::success(
                            bundle.text("common.success"),
                            bundle.text("paper_list.toast_updated"),
                        ));
                        fetch_papers.emit(());
                        on_refresh.emit(());
                    }
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
            });
        })
    };

    let on_check_now = {
        let api = api.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let client = api.client.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.check_now().await {
                    Ok(_) => on_toast.emit(ToastRequest::success(
                        bundle.text("common.success"),
                        bundle.text("paper_list.toast_check_initiated"),
                    )),
                    Err(err) => on_toast.emit(ToastRequest::error(
                        bundle.text("common.error"),
                        err.message,
                    )),
                }
            });
        })
    };

    let t = |key: &str| bundle.text(key);

    if *loading {
        return html! { <div class="card"><p class="muted">{t("paper_list.loading")}</p></div> };
    }

    let groups = venue_groups((*papers).clone(), &t("common.unknown_venue"));

    html! {
        <div class="card">
            <header class="card-header">
                <h2>{t("paper_list.title")}</h2>
                <div class="actions">
                    <button type="button" class="outline" onclick={{
                        let fetch_papers = fetch_papers.clone();
                        Callback::from(move |_| fetch_papers.emit(()))
                    }}>
                        {t("paper_list.refresh")}
                    </button>
                    <button type="button" class="solid" onclick={{
                        let on_check_now = on_check_now.clone();
                        Callback::from(move |_| on_check_now.emit(()))
                    }}>
                        {t("paper_list.check_all")}
                    </button>
                </div>
            </header>
            {if papers.is_empty() {
                html! { <p class="muted centered">{t("paper_list.none")}</p> }
            } else {
                html! {
                    <div class="groups">
                        {for groups.into_iter().map(|(venue, venue_papers)| {
                            let count = venue_papers.len();
                            html! {
                                <section class="venue-group">
                                    <h3>
                                        <span class="pill">{venue}</span>
                                        <span class="muted">{bundle.format(
                                            "paper_list.venue_count",
                                            &[("count", count.to_string())],
                                        )}</span>
                                    </h3>
                                    <div class="rows">
                                        {for venue_papers.into_iter().map(|paper| {
                                            render_paper(&bundle, &paper, &on_delete, &on_rename)
                                        })}
                                    </div>
                                </section>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}

fn render_paper(
    bundle: &TranslationBundle,
    paper: &Paper,
    on_delete: &Callback<i64>,
    on_rename: &Callback<(i64, String)>,
) -> Html {
    let display_title = paper
        .title
        .clone()
        .unwrap_or_else(|| paper.openreview_id.clone());
    let subscriber_count = paper.subscriber_count.unwrap_or(0);
    let notified_review = paper.notified_review.unwrap_or(false);
    let notified_decision = paper.notified_decision.unwrap_or(false);
    let id = paper.id;
    let delete = {
        let on_delete = on_delete.clone();
        Callback::from(move |_| on_delete.emit(id))
    };
    let rename = {
        let on_rename = on_rename.clone();
        let current = display_title.clone();
        Callback::from(move |_| on_rename.emit((id, current.clone())))
    };

    html! {
        <article class="row">
            <div class="row-main">
                <div class="row-title">
                    <h4>{display_title.clone()}</h4>
                    <a
                        href={forum_url(&paper.openreview_id)}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="muted"
                    >
                        {"↗"}
                    </a>
                </div>
                <div class="row-meta">
                    <span class={status_badge_class(paper.status)}>
                        {bundle.text(status_label_key(paper.status))}
                    </span>
                    <span class="muted">{bundle.format(
                        "paper_list.subscriber_count",
                        &[("count", subscriber_count.to_string())],
                    )}</span>
                    <span
                        class={classes!("chip", notified_review.then_some("sent"))}
                        title={bundle.text(if notified_review {
                            "paper_list.review_sent"
                        } else {
                            "paper_list.review_pending"
                        })}
                    >
                        {bundle.text("common.review")}
                    </span>
                    <span
                        class={classes!("chip", notified_decision.then_some("sent"))}
                        title={bundle.text(if notified_decision {
                            "paper_list.decision_sent"
                        } else {
                            "paper_list.decision_pending"
                        })}
                    >
                        {bundle.text("common.decision")}
                    </span>
                </div>
                {match paper.last_checked.as_deref() {
                    Some(checked) => html! {
                        <p class="muted footnote">{bundle.format(
                            "paper_list.last_checked",
                            &[("date", format_timestamp(checked, bundle.locale))],
                        )}</p>
                    },
                    None => html! {},
                }}
            </div>
            <div class="row-actions">
                <button
                    type="button"
                    class="ghost"
                    title={bundle.text("paper_list.rename_title")}
                    onclick={rename}
                >
                    {"✎"}
                </button>
                <button
                    type="button"
                    class="ghost danger"
                    title={bundle.text("paper_list.delete_title")}
                    onclick={delete}
                >
                    {"🗑"}
                </button>
            </div>
        </article>
    }
}
