//! Feedback Page Component
//!
//! Support form; the backend hands submissions to its ticketing automation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::forms::FeedbackForm;
use crate::models::{FeedbackAck, Urgency};
use crate::request_state::RequestTracker;

const DEFAULT_ACK: &str = "Feedback submitted, we will look into it shortly";

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (issue_title, set_issue_title) = signal(String::new());
    let (issue_description, set_issue_description) = signal(String::new());
    let (customer_name, set_customer_name) = signal(String::new());
    let (customer_email, set_customer_email) = signal(String::new());
    let (urgency, set_urgency) = signal(Urgency::default());
    let submit = RwSignal::new(RequestTracker::<FeedbackAck>::default());

    let reset_form = move || {
        set_issue_title.set(String::new());
        set_issue_description.set(String::new());
        set_customer_name.set(String::new());
        set_customer_email.set(String::new());
        set_urgency.set(Urgency::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = FeedbackForm {
            issue_title: issue_title.get(),
            issue_description: issue_description.get(),
            customer_name: customer_name.get(),
            customer_email: customer_email.get(),
            urgency: urgency.get(),
        };
        let report = match form.validate() {
            Ok(report) => report,
            Err(err) => {
                submit.update(|s| s.fail(err.to_string()));
                return;
            }
        };
        let Some(ticket) = submit.try_update(|s| s.begin_fresh()) else { return };

        let api = api.clone();
        spawn_local(async move {
            let result = api.submit_feedback(&report).await;
            let accepted = result.is_ok();
            submit.update(|s| {
                s.finish(ticket, result);
            });
            if accepted {
                reset_form();
            }
        });
    };

    let pending = move || submit.with(|s| s.is_pending());
    let text_input = move |kind: &'static str,
                           placeholder: &'static str,
                           value: ReadSignal<String>,
                           set: WriteSignal<String>| view! {
        <input
            type=kind
            placeholder=placeholder
            required
            prop:value=move || value.get()
            on:input=move |ev| set.set(event_target_value(&ev))
        />
    };

    view! {
        <section class="card">
            <h2>"Report a problem"</h2>
            <p class="card__intro">
                "Ran into a problem? Fill in the form below and our automation will pick it up."
            </p>

            <form class="form" on:submit=on_submit>
                <label>
                    "Issue title " <span class="required">"*"</span>
                    {text_input("text", "e.g. payment failed, page will not load", issue_title, set_issue_title)}
                </label>

                <label>
                    "Description " <span class="required">"*"</span>
                    <textarea
                        rows="6"
                        placeholder="Steps to reproduce, error messages, ..."
                        required
                        prop:value=move || issue_description.get()
                        on:input=move |ev| set_issue_description.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Your name " <span class="required">"*"</span>
                    {text_input("text", "Your name", customer_name, set_customer_name)}
                </label>

                <label>
                    "Your email " <span class="required">"*"</span>
                    {text_input("email", "example@email.com", customer_email, set_customer_email)}
                </label>

                <label>
                    "Urgency " <span class="required">"*"</span>
                    <select
                        required
                        prop:value=move || urgency.get().as_str()
                        on:change=move |ev| {
                            if let Ok(selected) = event_target_value(&ev).parse::<Urgency>() {
                                set_urgency.set(selected);
                            }
                        }
                    >
                        {Urgency::ALL.iter().map(|&u| view! {
                            <option value=u.as_str() selected=move || urgency.get() == u>{u.label()}</option>
                        }).collect_view()}
                    </select>
                    <small class="hint">{move || urgency.get().hint()}</small>
                </label>

                <button type="submit" disabled=pending>
                    {move || if pending() { "Submitting..." } else { "Submit feedback" }}
                </button>
            </form>

            {move || submit.with(|s| s.value().map(|ack| {
                if ack.message.is_empty() { DEFAULT_ACK.to_string() } else { ack.message.clone() }
            })).map(|msg| view! {
                <p class="success">{msg}</p>
            })}
            {move || submit.with(|s| s.error().map(str::to_string)).map(|err| view! {
                <p class="error">{err}</p>
            })}
        </section>
    }
}
