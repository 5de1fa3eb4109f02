use dioxus::prelude::*;

use super::offer_banner::OfferBanner;
use super::rate_card::RateCard;
use crate::domain::{OfferReveal, RateQuote};
use crate::ui::theme;

pub const REVEAL_LABEL: &str = "Reveal Offer";

/// Business name, its rate, the discounted final rate and the special-offer reveal.
///
/// Rates are derived from the props on every render. The reveal flag is local to
/// this instance and starts hidden on mount.
#[component]
pub fn RateDisplay(business_name: Option<String>, discount_rate: Option<f64>) -> Element {
    let mut reveal = use_signal(OfferReveal::default);
    let quote = RateQuote::new(business_name.as_deref(), discount_rate);

    rsx! {
        RateDisplayView {
            quote: quote,
            reveal: reveal(),
            on_reveal: move |_| {
                reveal.with_mut(|state| {
                    if state.reveal() {
                        tracing::debug!("special offer revealed");
                    }
                });
            },
        }
    }
}

/// Stateless markup for [`RateDisplay`].
#[component]
pub fn RateDisplayView(quote: RateQuote, reveal: OfferReveal, on_reveal: EventHandler<()>) -> Element {
    let show_offer = reveal.shows_banner(quote.has_special_rate);
    let business_name = quote.business_name_display().to_string();
    let business_rate = quote.business_rate_display();
    let final_rate = quote.final_rate_display();

    rsx! {
        section { class: "{theme::CONTAINER}",
            RateCard {
                heading: "Business Name",
                primary: true,
                test_id: "business-name",
                value: business_name,
            }
            RateCard {
                heading: "Business Rate",
                primary: false,
                test_id: "business-rate",
                value: business_rate,
            }
            button {
                class: "{theme::REVEAL_BUTTON}",
                r#type: "button",
                onclick: move |_| on_reveal.call(()),
                "{REVEAL_LABEL}"
            }
            if show_offer {
                OfferBanner {}
            }
            div {
                class: "{theme::FINAL_RATE}",
                "data-testid": "final-rate",
                "{final_rate}"
            }
        }
    }
}
