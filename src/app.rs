//! Blog Frontend App
//!
//! Composition root: owns the navigation state and picks the visible page.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{
    ArticleDetailPage, CreatePage, FeedbackPage, HomePage, NavBar, SearchPage,
};
use crate::config::client_config;
use crate::context::NavContext;
use crate::models::{Article, ArticleId};
use crate::navigation::{NavEvent, NavigationState, Page};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (nav_state, set_nav_state) = signal(NavigationState::default());
    let nav = NavContext::new((nav_state, set_nav_state));

    // Provide context to all children
    provide_context(nav);
    provide_context(ApiClient::from_config(client_config()));

    // Page callbacks report upward; only this component moves the state
    let navigate = Callback::new(move |page: Page| nav.dispatch(NavEvent::Navigate(page)));
    let open_article = Callback::new(move |id: ArticleId| nav.dispatch(NavEvent::OpenArticle(id)));
    let article_created = Callback::new(move |article: Article| {
        tracing::info!(id = article.id, "article created");
        nav.dispatch(NavEvent::ArticleCreated);
    });
    let back_to_search = Callback::new(move |_: ()| nav.dispatch(NavEvent::Back));

    view! {
        <div class="app">
            <header class="app__header">
                <h1>"My Blog"</h1>
                <Show when=move || nav.shows_menu()>
                    <NavBar />
                </Show>
            </header>

            <main class="app__content">
                {move || match nav.state.get() {
                    NavigationState::Home => view! { <HomePage on_navigate=navigate /> }.into_any(),
                    NavigationState::Search => view! { <SearchPage on_article_click=open_article /> }.into_any(),
                    NavigationState::Create => view! { <CreatePage on_created=article_created /> }.into_any(),
                    NavigationState::Detail { article_id } => view! {
                        <ArticleDetailPage article_id=article_id on_back=back_to_search />
                    }.into_any(),
                    NavigationState::Feedback => view! { <FeedbackPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
