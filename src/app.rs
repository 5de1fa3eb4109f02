use dioxus::prelude::*;

use crate::{
    ui::components::RateDisplay,
    util::{assets, config::LaunchConfig},
};

#[component]
pub fn App() -> Element {
    let config = use_context::<LaunchConfig>();

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        RateDisplay {
            business_name: config.business_name.clone(),
            discount_rate: config.discount_rate,
        }
    }
}
