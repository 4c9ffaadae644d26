use dioxus::prelude::*;

#[component]
pub fn BrandStrip() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "brand_strip",
            span { class: "brand_mark" }
            div { class: "brand_text",
                p { class: "brand_name", {crate::t(lang, "brand.name")} }
                p { class: "brand_tagline", {crate::t(lang, "brand.tagline")} }
            }
        }
    }
}
