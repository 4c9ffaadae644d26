use dioxus::prelude::*;
use ui::{BrandStrip, Hero, ScreenshotGallery};

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang()();
    rsx! {
        document::Title { {ui::t(lang, "meta.title")} }
        document::Meta { name: "description", content: ui::t(lang, "meta.desc") }

        Hero {}
        div { class: "site_container",
            ScreenshotGallery {}
            BrandStrip {}
        }
    }
}
