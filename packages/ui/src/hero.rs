use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            h1 { class: "product_name", {crate::t(lang, "app.name")} }
            // The Chinese slogan line-breaks mid-sentence.
            p { class: "slogan", dangerous_inner_html: crate::t(lang, "home.slogan") }

            div { class: "release_notes",
                p { class: "release_line", {crate::t(lang, "home.ios_update")} }
                p { class: "release_line", {crate::t(lang, "home.android_update")} }
            }

            div { class: "cta_row",
                a { class: "btn primary", href: "#", {crate::t(lang, "home.cta.ios")} }
                a { class: "btn", href: "#", {crate::t(lang, "home.cta.android")} }
                a { class: "btn", href: "#", {crate::t(lang, "home.cta.play")} }
            }
        }
    }
}
