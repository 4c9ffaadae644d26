use dioxus::prelude::*;

const SCREENSHOT_KEYS: [&str; 4] = [
    "home.screenshot_1",
    "home.screenshot_2",
    "home.screenshot_3",
    "home.screenshot_4",
];

/// Four phone-framed screenshot slots. Still placeholders until the app
/// store listing ships real captures.
#[component]
pub fn ScreenshotGallery() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "screenshots",
            for key in SCREENSHOT_KEYS {
                div { class: "phone_frame", key: "{key}",
                    div {
                        class: "screenshot_placeholder",
                        dangerous_inner_html: crate::t(lang, key),
                    }
                }
            }
        }
    }
}
