//! Links module - opening project and social links in the browser.

mod error;
mod opener;
mod plugin;

pub use error::LinkError;
pub use opener::{check_url, launch_url, open_external_links};
pub use plugin::LinksPlugin;
