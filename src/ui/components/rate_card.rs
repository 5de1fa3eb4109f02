use dioxus::prelude::*;

use crate::ui::theme;

/// Heading plus a card holding a single value. An empty value leaves the card empty.
#[component]
pub fn RateCard(heading: &'static str, primary: bool, test_id: &'static str, value: String) -> Element {
    rsx! {
        if primary {
            h1 { "{heading}" }
        } else {
            h2 { "{heading}" }
        }
        div {
            class: "{theme::CARD}",
            "data-testid": "{test_id}",
            "{value}"
        }
    }
}
