//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod screenshots;
pub use screenshots::ScreenshotGallery;

mod brand_strip;
pub use brand_strip::BrandStrip;

mod footer;
pub use footer::SiteFooter;

mod lang_switcher;
pub use lang_switcher::LangSwitcher;

mod lang_blocks;
pub use lang_blocks::LangBlocks;

mod theme;
pub use theme::SiteTheme;

mod i18n;
pub use i18n::{detect_lang, set_lang, t, use_lang, I18nProvider, Lang};
