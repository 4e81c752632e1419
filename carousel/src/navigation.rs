//! Navigation capability injected into the carousel and page shell.

use std::cell::RefCell;
use std::rc::Rc;

/// Side effects a card or call-to-action can trigger.
///
/// The landing app implements this over the Leptos router; tests use
/// [`RecordingNavigator`].
pub trait Navigator {
    /// Change the displayed page to `path`.
    fn navigate(&self, path: &str);

    /// Hand `url` to the host environment (new tab).
    fn open_external(&self, url: &str);
}

/// Reference-counted navigator shared between components.
pub type SharedNavigator = Rc<dyn Navigator>;

/// Navigator that remembers every request instead of acting on it.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    paths: Rc<RefCell<Vec<String>>>,
    external: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    /// Paths passed to [`Navigator::navigate`], oldest first.
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }

    /// URLs passed to [`Navigator::open_external`], oldest first.
    pub fn external(&self) -> Vec<String> {
        self.external.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }

    fn open_external(&self, url: &str) {
        self.external.borrow_mut().push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_log() {
        let nav = RecordingNavigator::default();
        let shared: SharedNavigator = Rc::new(nav.clone());
        shared.navigate("/rewards");
        shared.navigate("/");
        assert_eq!(nav.paths(), vec!["/rewards".to_string(), "/".to_string()]);
        assert!(nav.external().is_empty());
    }
}
