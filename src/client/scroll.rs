/// Host-side effects triggered on a route change.
pub trait RouteHost {
    /// Reset the document scroll offset to the top.
    fn scroll_to_top(&mut self);
    /// Report a pageview to the analytics backend; hosts without one
    /// leave this a no-op.
    fn pageview(&mut self);
}

/// Watches route transitions and scrolls back to the top whenever the
/// path actually changes. The first observed path only seeds the
/// comparison.
#[derive(Debug, Default)]
pub struct ScrollReset {
    current_path: Option<String>,
}

impl ScrollReset {
    pub fn new() -> Self {
        ScrollReset::default()
    }

    /// Observes a navigation; returns whether the effects fired.
    /// Re-renders of the same path are ignored.
    pub fn on_navigate(&mut self, path: &str, host: &mut dyn RouteHost) -> bool {
        match self.current_path.as_deref() {
            None => {
                self.current_path = Some(path.to_string());
                false
            }
            Some(previous) if previous == path => false,
            Some(_) => {
                self.current_path = Some(path.to_string());
                host.scroll_to_top();
                host.pageview();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        scrolls: usize,
        pageviews: usize,
    }

    impl RouteHost for RecordingHost {
        fn scroll_to_top(&mut self) {
            self.scrolls += 1;
        }

        fn pageview(&mut self) {
            self.pageviews += 1;
        }
    }

    #[test]
    fn effects_fire_only_on_an_actual_path_change() {
        let mut reset = ScrollReset::new();
        let mut host = RecordingHost::default();

        // Initial mount seeds the path without firing.
        assert!(!reset.on_navigate("/contacts", &mut host));
        assert_eq!(host.scrolls, 0);

        // Re-render of the same path.
        assert!(!reset.on_navigate("/contacts", &mut host));
        assert_eq!(host.scrolls, 0);

        assert!(reset.on_navigate("/contacts/c1", &mut host));
        assert_eq!(host.scrolls, 1);
        assert_eq!(host.pageviews, 1);

        assert!(reset.on_navigate("/contacts", &mut host));
        assert_eq!(host.scrolls, 2);
        assert_eq!(host.pageviews, 2);
    }
}
