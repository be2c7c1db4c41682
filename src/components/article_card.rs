//! Article Card Component
//!
//! One clickable search result.

use leptos::prelude::*;

use crate::format::format_datetime;
use crate::models::{Article, ArticleId};

#[component]
pub fn ArticleCard(
    article: Article,
    #[prop(into)] on_click: Callback<ArticleId>,
) -> impl IntoView {
    let id = article.id;
    let created = format_datetime(&article.created_at);

    view! {
        <li class="list__item list__item--clickable" on:click=move |_| on_click.run(id)>
            <div class="list__meta">
                <strong>{article.title}</strong>
                <small>{created}</small>
            </div>
            <p>{article.content}</p>
        </li>
    }
}
