//! Router-backed implementation of the carousel's `Navigator`.

use std::rc::Rc;

use aoclima_carousel::{Navigator, SharedNavigator};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Navigates through the Leptos router; external links open a new tab.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Must be called below `<Router>`.
    pub fn from_router() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }

    pub fn shared() -> SharedNavigator {
        Rc::new(Self::from_router())
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(%path, "navigate");
        (self.navigate)(path, NavigateOptions::default());
    }

    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(%url, "no window to open external link in");
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            tracing::warn!(%url, error = ?err, "failed to open external link");
        }
    }
}
