/// Client routes the session layer can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Dashboard => "/admin/dashboard",
        }
    }
}

/// Sink for navigation side effects.
///
/// The route guard, the request layer and the credential lifecycle all
/// redirect through this seam; the embedding UI decides what a route change
/// actually does.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Default navigator: logs the transition and nothing else.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = route.path(), "navigation requested");
    }
}
