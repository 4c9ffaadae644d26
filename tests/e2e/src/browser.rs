use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::launch_with_args(vec![])
    }

    /// Launch with a forced UI locale (`navigator.language`) for the
    /// detection tests. Each launch gets a fresh profile, so there is no
    /// leftover localStorage from a previous test.
    pub fn launch_with_locale(locale: &str) -> Result<Self> {
        Self::launch_with_args(vec![format!("--lang={locale}")])
    }

    fn launch_with_args(extra: Vec<String>) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .args(extra.iter().map(OsStr::new).collect())
            .build()
            .expect("Failed to build launch options");

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    /// Whether a Chrome/Chromium binary is reachable on this machine.
    pub fn is_available() -> bool {
        headless_chrome::browser::default_executable().is_ok()
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        self.tab.reload(false, None)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Run a JS expression and return its value.
    pub fn evaluate(&self, js: &str) -> Result<serde_json::Value> {
        let object = self.tab.evaluate(js, false)?;
        Ok(object.value.unwrap_or(serde_json::Value::Null))
    }

    /// Run a JS expression and return its value as a string.
    pub fn evaluate_string(&self, js: &str) -> Result<String> {
        match self.evaluate(js)? {
            serde_json::Value::String(s) => Ok(s),
            other => Ok(other.to_string()),
        }
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let js = format!(
            r#"(function(){{
              var el = document.querySelector({selector:?});
              return el ? el.getAttribute({name:?}) : null;
            }})()"#
        );
        match self.evaluate(&js)? {
            serde_json::Value::String(s) => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    /// Poll a JS expression until it is truthy. The page re-renders
    /// asynchronously after a click, so assertions go through this.
    pub fn wait_for_js_true(&self, js: &str) -> Result<()> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let serde_json::Value::Bool(true) = self.evaluate(js)? {
                return Ok(());
            }
            if Instant::now() > deadline {
                anyhow::bail!("condition never became true: {js}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
