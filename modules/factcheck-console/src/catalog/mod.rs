//! Static catalogs the selection menus choose from.

pub mod languages;
pub mod providers;

pub use languages::{is_rtl, Language};
pub use providers::Provider;
