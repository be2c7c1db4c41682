//! Article Detail Page Component
//!
//! Loads one article on mount. The only way out is the back button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::format::format_datetime;
use crate::models::{Article, ArticleId};
use crate::request_state::RequestTracker;

#[component]
pub fn ArticleDetailPage(
    article_id: ArticleId,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");

    // Pending from the first render until the lookup lands
    let mut tracker = RequestTracker::<Article>::default();
    let ticket = tracker.begin();
    let load = RwSignal::new(tracker);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.get_article(article_id).await;
            load.update(|s| {
                s.finish(ticket, result);
            });
        });
    });

    let back_button = move |class: &'static str, label: &'static str| view! {
        <button class=class on:click=move |_| on_back.run(())>{label}</button>
    };

    move || load.with(|s| {
        if s.is_pending() {
            view! {
                <section class="card">
                    <p>"Loading..."</p>
                </section>
            }.into_any()
        } else if let Some(err) = s.error() {
            view! {
                <section class="card">
                    <p class="error">{err.to_string()}</p>
                    {back_button("btn btn--primary", "Back")}
                </section>
            }.into_any()
        } else if let Some(article) = s.value() {
            view! {
                <section class="card article-detail">
                    <div class="article-detail__header">
                        {back_button("btn btn--secondary", "← Back")}
                        <h2 class="article-detail__title">{article.title.clone()}</h2>
                        <p class="article-detail__meta">
                            "Created: " {format_datetime(&article.created_at)}
                        </p>
                    </div>
                    <div class="article-detail__content">
                        <p>{article.content.clone()}</p>
                    </div>
                </section>
            }.into_any()
        } else {
            view! {
                <section class="card">
                    <p>"article does not exist"</p>
                    {back_button("btn btn--primary", "Back")}
                </section>
            }.into_any()
        }
    })
}
