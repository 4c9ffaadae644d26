use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Zh,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Value written to the `<html lang>` attribute.
    pub fn document_code(self) -> &'static str {
        match self {
            Lang::Zh => "zh-CN",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh-hans" => Some(Lang::Zh),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }
}

/// localStorage key holding the visitor's last explicit choice.
const LANG_STORAGE_KEY: &str = "ipet-lang";

/// Pick the language for this visit: a valid saved preference wins, then
/// the browser locale (any `zh*` tag means Chinese), then English.
fn choose_lang(saved: Option<&str>, locale: Option<&str>) -> Lang {
    if let Some(lang) = saved.and_then(Lang::from_code) {
        return lang;
    }
    match locale {
        Some(l) if l.to_ascii_lowercase().starts_with("zh") => Lang::Zh,
        _ => Lang::En,
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_lang_sync() -> Lang {
    match web_sys::window() {
        Some(window) => {
            let saved = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|storage| storage.get_item(LANG_STORAGE_KEY).ok().flatten());
            let locale = window.navigator().language();
            choose_lang(saved.as_deref(), locale.as_deref())
        }
        None => Lang::En,
    }
}

// Best-effort: webviews go through eval since there is no direct storage
// handle there. Returns both raw values so the precedence rule stays in
// `choose_lang`.
#[cfg(not(target_arch = "wasm32"))]
async fn detect_lang_eval() -> Option<Lang> {
    let js = r#"
    (function(){
      var saved = "";
      try { saved = localStorage.getItem("ipet-lang") || ""; } catch(e) {}
      var nav = "";
      try { nav = navigator.language || navigator.userLanguage || ""; } catch(e) {}
      return [saved, nav];
    })()
    "#;
    let value = document::eval(js).await.ok()?;
    let parts = value.as_array()?;
    let saved = parts
        .first()
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    let locale = parts
        .get(1)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty());
    Some(choose_lang(saved, locale))
}

/// Resolve the language the page should show right now.
pub async fn detect_lang() -> Lang {
    #[cfg(target_arch = "wasm32")]
    {
        detect_lang_sync()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        detect_lang_eval().await.unwrap_or(Lang::En)
    }
}

fn persist_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(LANG_STORAGE_KEY, lang.code());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{ try {{ localStorage.setItem("{}","{}"); }} catch(e) {{}} return ""; }})()"#,
                LANG_STORAGE_KEY,
                lang.code()
            ))
            .await;
        });
    }
}

/// Provide `Signal<Lang>` to the component tree.
///
/// On the web the signal already starts with the detected language (the
/// storage read is synchronous there); webviews show English for the first
/// frame and the detection effect corrects it right after mount.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(initial_lang);
    use_context_provider(|| lang);

    // One-shot detection. The original site stores even the auto-detected
    // choice so the next visit skips detection; keep that behavior.
    use_effect(move || {
        spawn(async move {
            let detected = detect_lang().await;
            lang.set(detected);
            persist_lang(detected);
        });
    });

    // Keep `<html lang>` in sync with the active language.
    use_effect(move || {
        let code = lang().document_code();
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{ document.documentElement.lang = "{}"; return ""; }})()"#,
                code
            ))
            .await;
        });
    });

    rsx! { {children} }
}

fn initial_lang() -> Lang {
    #[cfg(target_arch = "wasm32")]
    {
        detect_lang_sync()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Lang::En
    }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

pub fn set_lang(lang: Lang) {
    let mut s = use_lang();
    s.set(lang);
    persist_lang(lang);
}

/// Translate a key for a given language. Falls back to Chinese if missing.
///
/// A handful of values carry inline `<br>` markup; render those through
/// `dangerous_inner_html`. The document title and meta keys are plain text.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Page meta
        (Lang::Zh, "meta.title") => {
            "i 宠家 - iPet Family | AI宠物品种识别、健康咨询、艺术照生成".to_string()
        }
        (Lang::En, "meta.title") => {
            "iPet Family | AI Pet Breed Recognition, Health & Art Photos".to_string()
        }
        (Lang::Zh, "meta.desc") => {
            "AI宠物品种识别、健康咨询、艺术照生成，铲屎官们的必备神器".to_string()
        }
        (Lang::En, "meta.desc") => {
            "AI Pet Breed Recognition, Health Consultation & Art Photo Generation — A Must-Have for Pet Owners".to_string()
        }

        // Hero
        (Lang::Zh, "app.name") => "i 宠家 - iPet Family".to_string(),
        (Lang::En, "app.name") => "iPet Family".to_string(),
        (Lang::Zh, "home.slogan") => {
            "AI宠物品种识别、健康咨询、艺术照生成，<br>铲屎官们的必备神器".to_string()
        }
        (Lang::En, "home.slogan") => {
            "AI Pet Breed Recognition, Health Consultation & Art Photo Generation — A Must-Have for Cat and Dog Owners".to_string()
        }
        (Lang::Zh, "home.ios_update") => "i 宠家 - iPet Family iOS 版 1.0 正式上线".to_string(),
        (Lang::En, "home.ios_update") => "iPet Family iOS 1.0 Now Available".to_string(),
        (Lang::Zh, "home.android_update") => {
            "i 宠家 - iPet Family 安卓版 1.0 正式上线".to_string()
        }
        (Lang::En, "home.android_update") => "iPet Family Android 1.0 Now Available".to_string(),
        (Lang::Zh, "home.cta.ios") => "iOS版".to_string(),
        (Lang::En, "home.cta.ios") => "iOS".to_string(),
        (Lang::Zh, "home.cta.android") => "Android版".to_string(),
        (Lang::En, "home.cta.android") => "Android".to_string(),
        (Lang::Zh, "home.cta.play") => "Play Store版".to_string(),
        (Lang::En, "home.cta.play") => "Play Store".to_string(),

        // Screenshot placeholders
        (Lang::Zh, "home.screenshot_1") => "截图展示区 1<br>请替换为 App 截图".to_string(),
        (Lang::En, "home.screenshot_1") => "Screenshot 1<br>Replace with App Screenshot".to_string(),
        (Lang::Zh, "home.screenshot_2") => "截图展示区 2<br>请替换为 App 截图".to_string(),
        (Lang::En, "home.screenshot_2") => "Screenshot 2<br>Replace with App Screenshot".to_string(),
        (Lang::Zh, "home.screenshot_3") => "截图展示区 3<br>请替换为 App 截图".to_string(),
        (Lang::En, "home.screenshot_3") => "Screenshot 3<br>Replace with App Screenshot".to_string(),
        (Lang::Zh, "home.screenshot_4") => "截图展示区 4<br>请替换为 App 截图".to_string(),
        (Lang::En, "home.screenshot_4") => "Screenshot 4<br>Replace with App Screenshot".to_string(),

        // Brand strip under the phone mockups
        (Lang::Zh, "brand.name") => "i 宠家 - iPet Family".to_string(),
        (Lang::En, "brand.name") => "iPet Family".to_string(),
        (Lang::Zh, "brand.tagline") => "更懂你的宠物管家".to_string(),
        (Lang::En, "brand.tagline") => "Your Smart Pet Care Companion".to_string(),

        // Footer
        (Lang::Zh, "footer.copyright") => {
            "Copyright © 2026 i 宠家 - iPet Family. All Rights Reserved.".to_string()
        }
        (Lang::En, "footer.copyright") => {
            "Copyright © 2026 iPet Family. All Rights Reserved.".to_string()
        }
        (Lang::Zh, "footer.privacy") => "隐私政策".to_string(),
        (Lang::En, "footer.privacy") => "Privacy Policy".to_string(),
        (Lang::Zh, "footer.terms") => "用户协议".to_string(),
        (Lang::En, "footer.terms") => "Terms of Service".to_string(),

        // Legal pages
        (Lang::Zh, "privacy.title") => "隐私政策 - i 宠家 iPet Family".to_string(),
        (Lang::En, "privacy.title") => "Privacy Policy - iPet Family".to_string(),
        (Lang::Zh, "terms.title") => "用户协议 - i 宠家 iPet Family".to_string(),
        (Lang::En, "terms.title") => "Terms of Service - iPet Family".to_string(),

        // Common
        (Lang::Zh, "common.back_home") => "← 返回首页".to_string(),
        (Lang::En, "common.back_home") => "← Back to Home".to_string(),
        (Lang::Zh, "lang.label") => "语言".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),

        // Fallback: use the Chinese string if present, else show the key.
        (Lang::En, k) => t(Lang::Zh, k),
        (Lang::Zh, _) => key.to_string(),
    }
}
