//! Create Page Component
//!
//! Form for writing a new article.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::forms::ArticleForm;
use crate::models::Article;
use crate::request_state::RequestTracker;

#[component]
pub fn CreatePage(#[prop(into)] on_created: Callback<Article>) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let save = RwSignal::new(RequestTracker::<Article>::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ArticleForm { title: title.get(), content: content.get() };
        let article = match form.validate() {
            Ok(article) => article,
            Err(err) => {
                save.update(|s| s.fail(err.to_string()));
                return;
            }
        };
        let Some(ticket) = save.try_update(|s| s.begin_fresh()) else { return };

        let api = api.clone();
        spawn_local(async move {
            let result = api.create_article(&article).await;
            let created = result.as_ref().ok().cloned();
            save.update(|s| {
                s.finish(ticket, result);
            });

            if let Some(article) = created {
                set_title.set(String::new());
                set_content.set(String::new());
                on_created.run(article);
            }
        });
    };

    let pending = move || save.with(|s| s.is_pending());

    view! {
        <section class="card">
            <h2>"Write an article"</h2>
            <form class="form" on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Content"
                    <textarea
                        rows="6"
                        required
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=pending>
                    {move || if pending() { "Saving..." } else { "Save" }}
                </button>
            </form>
            {move || save.with(|s| s.value().map(|article| format!("article #{} created", article.id))).map(|msg| view! {
                <p class="success">{msg}</p>
            })}
            {move || save.with(|s| s.error().map(str::to_string)).map(|err| view! {
                <p class="error">{err}</p>
            })}
        </section>
    }
}
