//! Subscriber list view, grouped by paper venue.

use crate::features::admin::state::subscriber_groups;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use paperwatch_api_models::Subscriber;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SubscriberListProps {
    pub subscribers: Vec<Subscriber>,
    pub on_delete: Callback<i64>,
    pub on_reset: Callback<i64>,
}

#[function_component(SubscriberList)]
pub(crate) fn subscriber_list(props: &SubscriberListProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key);

    html! {
        <div class="card">
            <header class="card-header">
                <h2>{t("admin.subscribers_title")}</h2>
            </header>
            <p class="muted">{t("admin.subscribers_description")}</p>
            {if props.subscribers.is_empty() {
                html! { <p class="muted centered">{t("admin.subscribers_none")}</p> }
            } else {
                let groups =
                    subscriber_groups(props.subscribers.clone(), &t("common.unknown_venue"));
                html! {
                    <div class="groups">
                        {for groups.into_iter().map(|(venue, subscribers)| html! {
                            <section class="venue-group">
                                <h3><span class="pill">{venue}</span></h3>
                                <div class="rows">
                                    {for subscribers.into_iter().map(|subscriber| {
                                        render_subscriber(
                                            &bundle,
                                            &subscriber,
                                            &props.on_delete,
                                            &props.on_reset,
                                        )
                                    })}
                                </div>
                            </section>
                        })}
                    </div>
                }
            }}
        </div>
    }
}

fn render_subscriber(
    bundle: &TranslationBundle,
    subscriber: &Subscriber,
    on_delete: &Callback<i64>,
    on_reset: &Callback<i64>,
) -> Html {
    let id = subscriber.id;
    let delete = {
        let on_delete = on_delete.clone();
        Callback::from(move |_| on_delete.emit(id))
    };
    let reset = {
        let on_reset = on_reset.clone();
        Callback::from(move |_| on_reset.emit(id))
    };
    let paper_label = subscriber
        .paper_title
        .clone()
        .unwrap_or_else(|| format!("ID: {}", subscriber.paper_id));
    let sent_label = |sent: bool| {
        bundle.text(if sent { "common.sent" } else { "common.pending" })
    };

    html! {
        <article class="row">
            <div class="row-main">
                <h4>{subscriber.email.clone()}</h4>
                <p class="muted">{bundle.format(
                    "admin.subscribers_paper",
                    &[("title", paper_label)],
                )}</p>
                <div class="row-meta">
                    {if subscriber.notify_on_review {
                        html! {
                            <span class={classes!(
                                "chip",
                                subscriber.notified_review.then_some("sent"),
                            )}>
                                {bundle.format(
                                    "admin.subscribers_review_status",
                                    &[("status", sent_label(subscriber.notified_review))],
                                )}
                            </span>
                        }
                    } else { html! {} }}
                    {if subscriber.notify_on_review_modified {
                        html! {
                            <span class="chip amber">
                                {bundle.text("admin.subscribers_review_changes")}
                            </span>
                        }
                    } else { html! {} }}
                    {if subscriber.notify_on_decision {
                        html! {
                            <span class={classes!(
                                "chip",
                                subscriber.notified_decision.then_some("sent"),
                            )}>
                                {bundle.format(
                                    "admin.subscribers_decision_status",
                                    &[("status", sent_label(subscriber.notified_decision))],
                                )}
                            </span>
                        }
                    } else { html! {} }}
                </div>
            </div>
            <div class="row-actions">
                <button
                    type="button"
                    class="ghost"
                    title={bundle.text("admin.subscribers_reset_title")}
                    onclick={reset}
                >
                    {"↺"}
                </button>
                <button
                    type="button"
                    class="ghost danger"
                    title={bundle.text("admin.subscribers_delete_title")}
                    onclick={delete}
                >
                    {"🗑"}
                </button>
            </div>
        </article>
    }
}
