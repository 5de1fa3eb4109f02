use dioxus::prelude::*;

use crate::ui::theme;

pub const OFFER_TEXT: &str = "You have a special business offer!";

#[component]
pub fn OfferBanner() -> Element {
    rsx! {
        div { class: "{theme::OFFER}", "{OFFER_TEXT}" }
    }
}
