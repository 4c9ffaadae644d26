use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use views::{Home, Privacy, Terms};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteNavbar)]
    #[route("/")]
    Home {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::logger::initialize_default();
    info!("startup: iPet Family site v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Chrome around every page: sticky header with the brand and the
/// language switcher, the routed content, then the shared footer.
#[component]
fn SiteNavbar() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        header { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "/",
                    span { class: "brand_mark" }
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                ui::LangSwitcher {}
            }
        }
        div { class: "route_view", Outlet::<Route> {} }
        ui::SiteFooter {}
    }
}
