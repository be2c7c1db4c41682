//! Search Page Component
//!
//! Keyword search with a clickable result list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::ArticleCard;
use crate::config::client_config;
use crate::models::{Article, ArticleId};
use crate::request_state::RequestTracker;

#[component]
pub fn SearchPage(#[prop(into)] on_article_click: Callback<ArticleId>) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (query, set_query) = signal(String::new());
    let search = RwSignal::new(RequestTracker::<Vec<Article>>::new(client_config().search_policy));

    let run_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let Some(ticket) = search.try_update(|s| s.begin()) else { return };

        let api = api.clone();
        spawn_local(async move {
            let result = api.search_articles(&q).await;
            // Responses are not tagged by default: whichever lands last is shown
            search.maybe_update(|s| s.finish(ticket, result));
        });
    };

    let pending = move || search.with(|s| s.is_pending());
    let results = move || search.with(|s| s.value().cloned().unwrap_or_default());

    view! {
        <section class="card">
            <h2>"Search articles"</h2>
            <form class="form" on:submit=run_search>
                <input
                    type="text"
                    placeholder="Keyword"
                    required
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=pending>
                    {move || if pending() { "Searching..." } else { "Search" }}
                </button>
            </form>
            {move || search.with(|s| s.error().map(str::to_string)).map(|err| view! {
                <p class="error">{err}</p>
            })}
            <ul class="list">
                <For
                    each=results
                    key=|article| article.id
                    children=move |article| view! {
                        <ArticleCard article=article on_click=on_article_click />
                    }
                />
            </ul>
        </section>
    }
}
