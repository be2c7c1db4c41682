//! Navigation Bar Component
//!
//! Persistent page switcher shown above every screen except the detail screen.

use leptos::prelude::*;

use crate::context::NavContext;
use crate::navigation::{NavEvent, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext should be provided");

    view! {
        <nav class="nav">
            {Page::MENU.iter().map(|&page| {
                let class = move || {
                    if nav.page() == page { "nav__btn nav__btn--active" } else { "nav__btn" }
                };
                view! {
                    <button class=class on:click=move |_| nav.dispatch(NavEvent::Navigate(page))>
                        {page.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
