use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::models::{SubscribeError, SubscriptionForm, SubscriptionRequest, NICHES};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delivery {
    Sent,
    /// No endpoint configured; nothing left the browser.
    Placeholder,
}

pub async fn submit(request: &SubscriptionRequest) -> Result<Delivery, SubscribeError> {
    let Some(url) = config::get_subscribe_endpoint() else {
        info!("No subscription endpoint configured, keeping signup local");
        if let Ok(body) = serde_json::to_string(request) {
            debug!("Subscription payload: {}", body);
        }
        return Ok(Delivery::Placeholder);
    };

    let response = Request::post(url)
        .json(request)
        .map_err(|e| SubscribeError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubscribeError::Network(e.to_string()))?;

    if response.ok() {
        Ok(Delivery::Sent)
    } else {
        Err(SubscribeError::Rejected(response.status()))
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Submitting,
    Done,
    Failed(String),
}

/// Numbers each submit attempt. Only the latest attempt may change the
/// form status, including the delayed return to idle.
#[derive(Debug, Default)]
struct Submissions {
    latest: u32,
}

impl Submissions {
    fn start(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let form = use_state(SubscriptionForm::default);
    let status = use_state(|| Status::Idle);
    let submissions = use_mut_ref(Submissions::default);

    let text_input = |update: fn(&mut SubscriptionForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let on_niche = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            form.set(SubscriptionForm {
                niche: value,
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let submissions = submissions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Submitting {
                return;
            }
            let ticket = submissions.borrow_mut().start();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    status.set(Status::Failed(err.to_string()));
                    return;
                }
            };

            status.set(Status::Submitting);
            let form = form.clone();
            let status = status.clone();
            let submissions = submissions.clone();
            spawn_local(async move {
                let result = submit(&request).await;
                if !submissions.borrow().is_current(ticket) {
                    return;
                }
                match result {
                    Ok(delivery) => {
                        info!("Subscription accepted ({:?})", delivery);
                        status.set(Status::Done);
                        form.set(SubscriptionForm::default());
                        TimeoutFuture::new(6_000).await;
                        if submissions.borrow().is_current(ticket) {
                            status.set(Status::Idle);
                        }
                    }
                    Err(err) => {
                        gloo_console::error!("Subscription failed:", err.to_string());
                        status.set(Status::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let submitting = *status == Status::Submitting;

    html! {
        <section class="subscribe" data-animate="fade-up">
            <h2 data-animate-child="">{"Join the Urban Desiii roster"}</h2>
            <p data-animate-child="">
                {"Tell us about you and your audience. Our team reviews every creator personally."}
            </p>
            <form class="subscribe-form" onsubmit={on_submit} data-animate-child="">
                <div class="form-row">
                    <label>
                        {"First name"}
                        <input type="text" name="first_name" value={form.first_name.clone()}
                            oninput={text_input(|f, v| f.first_name = v)} />
                    </label>
                    <label>
                        {"Last name"}
                        <input type="text" name="last_name" value={form.last_name.clone()}
                            oninput={text_input(|f, v| f.last_name = v)} />
                    </label>
                </div>
                <label>
                    {"Email"}
                    <input type="email" name="email" value={form.email.clone()}
                        oninput={text_input(|f, v| f.email = v)} />
                </label>
                <label>
                    {"Niche"}
                    <select name="niche" onchange={on_niche}>
                        <option value="" selected={form.niche.is_empty()}>{"Choose your niche"}</option>
                        { for NICHES.iter().map(|niche| html! {
                            <option value={*niche} selected={form.niche == *niche}>{*niche}</option>
                        }) }
                    </select>
                </label>
                <div class="form-row handles">
                    <label>
                        {"Instagram"}
                        <input type="text" name="instagram" placeholder="@handle" value={form.instagram.clone()}
                            oninput={text_input(|f, v| f.instagram = v)} />
                    </label>
                    <label>
                        {"TikTok"}
                        <input type="text" name="tiktok" placeholder="@handle" value={form.tiktok.clone()}
                            oninput={text_input(|f, v| f.tiktok = v)} />
                    </label>
                    <label>
                        {"YouTube"}
                        <input type="text" name="youtube" placeholder="@channel" value={form.youtube.clone()}
                            oninput={text_input(|f, v| f.youtube = v)} />
                    </label>
                </div>
                {
                    match &*status {
                        Status::Failed(message) => html! { <p class="form-error">{message}</p> },
                        Status::Done => html! {
                            <p class="form-success">{"Thanks! We'll be in touch within a few days."}</p>
                        },
                        _ => html! {},
                    }
                }
                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Subscribe" } }
                </button>
            </form>
            <style>
                {r#"
                .subscribe {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .subscribe-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .subscribe-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    flex: 1;
                    font-weight: 600;
                }
                .subscribe-form input,
                .subscribe-form select {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d9d9d9;
                    border-radius: 10px;
                    font-size: 1rem;
                }
                .form-row {
                    display: flex;
                    gap: 1rem;
                }
                .form-error {
                    color: #d93025;
                }
                .form-success {
                    color: #188038;
                }
                @media (max-width: 640px) {
                    .form-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
