//! Shared UI crate for Brawlboard. The data pipeline lives in [`core`]; the
//! Dioxus components in [`roster`] and [`views`] are used by both the web and
//! desktop shells.

pub mod core;
pub mod i18n;
pub mod roster;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
