//! Home Page Component

use leptos::prelude::*;

use crate::navigation::Page;

/// Welcome card with shortcuts to search and create
#[component]
pub fn HomePage(#[prop(into)] on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <section class="card home-page">
            <h2>"Welcome to my blog"</h2>
            <p class="home-page__description">
                "Search existing articles or write a new one."
            </p>
            <div class="home-page__actions">
                <button
                    class="btn btn--primary btn--large"
                    on:click=move |_| on_navigate.run(Page::Search)
                >
                    "🔍 Search articles"
                </button>
                <button
                    class="btn btn--secondary btn--large"
                    on:click=move |_| on_navigate.run(Page::Create)
                >
                    "✏️ Write an article"
                </button>
            </div>
        </section>
    }
}
