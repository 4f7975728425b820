//! Scroll-to-top on load and navigation.
//!
//! Browser globals are reached only through [`Viewport`] and [`SessionStore`],
//! so the controller can be driven from plain unit tests.

/// Moves the document scroll offset. Implementations jump without animating.
pub trait Viewport {
    fn scroll_to(&self, x: f64, y: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionFlag {
    HasNavigated,
    IsRefreshing,
}

impl SessionFlag {
    pub fn key(self) -> &'static str {
        match self {
            SessionFlag::HasNavigated => "hasNavigated",
            SessionFlag::IsRefreshing => "isRefreshing",
        }
    }
}

/// Per-tab flags that outlive a single page load.
pub trait SessionStore {
    fn get(&self, flag: SessionFlag) -> bool;
    fn set(&self, flag: SessionFlag, value: bool);
}

pub struct ScrollController<V, S> {
    viewport: V,
    session: S,
}

impl<V: Viewport, S: SessionStore> ScrollController<V, S> {
    pub fn new(viewport: V, session: S) -> Self {
        Self { viewport, session }
    }

    fn to_top(&self) {
        self.viewport.scroll_to(0.0, 0.0);
    }

    /// First mount of the app, including after a reload.
    pub fn on_load(&self) {
        self.to_top();
        self.session.set(SessionFlag::IsRefreshing, false);
        self.session.set(SessionFlag::HasNavigated, true);
    }

    /// Any client-side route change.
    pub fn on_route_change(&self, path: &str) {
        log::debug!("route changed to {path}, resetting scroll");
        self.to_top();
        self.session.set(SessionFlag::HasNavigated, true);
    }

    pub fn on_before_unload(&self) {
        self.session.set(SessionFlag::IsRefreshing, true);
    }

    /// Tab became visible again. Only a pending refresh resets the scroll.
    pub fn on_visible(&self) {
        if self.session.get(SessionFlag::IsRefreshing) {
            self.to_top();
            self.session.set(SessionFlag::IsRefreshing, false);
        }
    }

    #[cfg(test)]
    fn has_navigated(&self) -> bool {
        self.session.get(SessionFlag::HasNavigated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeViewport {
        offset: Cell<(f64, f64)>,
        calls: Cell<usize>,
    }

    impl Viewport for &FakeViewport {
        fn scroll_to(&self, x: f64, y: f64) {
            self.offset.set((x, y));
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSession(RefCell<HashSet<SessionFlag>>);

    impl SessionStore for &FakeSession {
        fn get(&self, flag: SessionFlag) -> bool {
            self.0.borrow().contains(&flag)
        }

        fn set(&self, flag: SessionFlag, value: bool) {
            if value {
                self.0.borrow_mut().insert(flag);
            } else {
                self.0.borrow_mut().remove(&flag);
            }
        }
    }

    #[test]
    fn test_route_change_resets_to_origin() {
        let viewport = FakeViewport::default();
        let session = FakeSession::default();
        let ctl = ScrollController::new(&viewport, &session);

        for path in ["/about", "/skills", "/", "/contact"] {
            viewport.offset.set((0.0, 1234.5));
            ctl.on_route_change(path);
            assert_eq!(viewport.offset.get(), (0.0, 0.0));
        }
        assert_eq!(viewport.calls.get(), 4);
    }

    #[test]
    fn test_on_load_marks_session() {
        let viewport = FakeViewport::default();
        let session = FakeSession::default();
        let ctl = ScrollController::new(&viewport, &session);

        assert!(!ctl.has_navigated());
        viewport.offset.set((10.0, 400.0));
        ctl.on_load();
        assert_eq!(viewport.offset.get(), (0.0, 0.0));
        assert!(ctl.has_navigated());
    }

    #[test]
    fn test_repeated_calls_are_harmless() {
        let viewport = FakeViewport::default();
        let session = FakeSession::default();
        let ctl = ScrollController::new(&viewport, &session);

        ctl.on_load();
        ctl.on_route_change("/about");
        ctl.on_route_change("/about");
        assert_eq!(viewport.offset.get(), (0.0, 0.0));
        assert_eq!(viewport.calls.get(), 3);
    }

    #[test]
    fn test_visible_after_refresh() {
        let viewport = FakeViewport::default();
        let session = FakeSession::default();
        let ctl = ScrollController::new(&viewport, &session);

        ctl.on_visible();
        assert_eq!(viewport.calls.get(), 0);

        ctl.on_before_unload();
        viewport.offset.set((0.0, 800.0));
        ctl.on_visible();
        assert_eq!(viewport.offset.get(), (0.0, 0.0));
        assert!(!session.0.borrow().contains(&SessionFlag::IsRefreshing));

        // flag cleared, so a second visibility change leaves the page alone
        viewport.offset.set((0.0, 300.0));
        ctl.on_visible();
        assert_eq!(viewport.offset.get(), (0.0, 300.0));
    }
}
