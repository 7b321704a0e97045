//! Scroll, reveal and easter-egg effects for the portfolio page.
//!
//! Behavior logic is written against [`page::Page`] and [`scheduler::Scheduler`]
//! so it runs the same in the browser and under the in-memory test page.

pub mod app;
pub mod config;
pub mod console;
pub mod dom;
pub mod error;
pub mod mount;
pub mod page;
pub mod scheduler;

pub mod behaviors {
    pub mod accents;
    pub mod active_link;
    pub mod anchors;
    pub mod confetti;
    pub mod counter;
    pub mod external_links;
    pub mod hover;
    pub mod konami;
    pub mod load_fade;
    pub mod logo;
    pub mod navbar;
    pub mod parallax;
    pub mod reveal;
    pub mod shortcuts;
    pub mod timeline;
}

#[cfg(test)]
mod testing;

pub use app::Portfolio;
pub use config::FxConfig;
pub use error::{FxError, FxResult};
