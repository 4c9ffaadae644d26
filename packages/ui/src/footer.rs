use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        footer { class: "site_footer",
            p { class: "copyright", {crate::t(lang, "footer.copyright")} }
            div { class: "legal_links",
                a { class: "legal_link", href: "/privacy", {crate::t(lang, "footer.privacy")} }
                a { class: "legal_link", href: "/terms", {crate::t(lang, "footer.terms")} }
            }
        }
    }
}
