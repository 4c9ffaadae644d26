use dioxus::prelude::*;

use crate::{use_lang, Lang};

/// Long-form pages (privacy, terms) keep both language versions mounted
/// and toggle visibility, so switching never rebuilds the page body.
#[component]
pub fn LangBlocks(zh: Element, en: Element) -> Element {
    let lang = use_lang()();
    rsx! {
        div {
            id: "zh-content",
            style: if lang == Lang::Zh { "" } else { "display: none;" },
            {zh}
        }
        div {
            id: "en-content",
            style: if lang == Lang::En { "" } else { "display: none;" },
            {en}
        }
    }
}
