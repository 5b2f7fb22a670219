use std::sync::Arc;

use tokio::sync::watch;

use super::route::Route;

/// The single current-route cell shared by every view.
///
/// Cloning yields another handle to the same cell.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Arc<watch::Sender<Route>>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Arc::new(watch::Sender::new(initial)),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    pub fn navigate(&self, route: Route) {
        let previous = self.current.send_replace(route);
        if previous != route {
            tracing::debug!("[Navigator] {} -> {}", previous, route);
        }
    }

    /// Moves to `target` only while still on `expected`.
    ///
    /// Returns whether the route changed.
    pub fn redirect_from(&self, expected: Route, target: Route) -> bool {
        let moved = self.current.send_if_modified(|current| {
            if *current == expected {
                *current = target;
                true
            } else {
                false
            }
        });
        if moved {
            tracing::debug!("[Navigator] Redirected {} -> {}", expected, target);
        } else {
            tracing::debug!(
                "[Navigator] Redirect from {} skipped, already on {}",
                expected,
                self.current()
            );
        }
        moved
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_cell() {
        let navigator = Navigator::default();
        let other = navigator.clone();
        other.navigate(Route::Posts);
        assert_eq!(navigator.current(), Route::Posts);
    }

    #[test]
    fn test_redirect_only_from_expected_route() {
        let navigator = Navigator::new(Route::Dashboard);
        assert!(!navigator.redirect_from(Route::Posts, Route::Login));
        assert_eq!(navigator.current(), Route::Dashboard);

        assert!(navigator.redirect_from(Route::Dashboard, Route::Login));
        assert_eq!(navigator.current(), Route::Login);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let navigator = Navigator::default();
        let mut rx = navigator.subscribe();
        navigator.navigate(Route::Users);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Route::Users);

        navigator.redirect_from(Route::Posts, Route::Login);
        assert!(!rx.has_changed().unwrap());
    }
}
