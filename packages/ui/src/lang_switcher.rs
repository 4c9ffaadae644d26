use dioxus::prelude::*;

use crate::{set_lang, use_lang, Lang};

/// The two-button language toggle in the site header. The button matching
/// the active language carries the `active` class.
#[component]
pub fn LangSwitcher() -> Element {
    let lang = use_lang()();
    rsx! {
        div { class: "lang_switcher", "aria-label": crate::t(lang, "lang.label"),
            button {
                class: "lang_btn",
                class: if lang == Lang::Zh { "active" },
                onclick: move |_| set_lang(Lang::Zh),
                "中文"
            }
            button {
                class: "lang_btn",
                class: if lang == Lang::En { "active" },
                onclick: move |_| set_lang(Lang::En),
                "EN"
            }
        }
    }
}
