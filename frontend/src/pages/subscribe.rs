use yew::prelude::*;

use crate::animation::observer::use_scroll_reveal;
use crate::subscribe::form::SubscribeForm;

#[function_component(Subscribe)]
pub fn subscribe() -> Html {
    use_scroll_reveal();

    html! {
        <main class="subscribe-page">
            <SubscribeForm />
        </main>
    }
}
