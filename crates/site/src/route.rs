use tokio::sync::watch;

/// Client-side routes of the site. Closed set; deep links inside a route
/// (e.g. a service name) stay out of the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Projects,
    Contact,
    Login,
}

/// Shared active-route state, starting on the home page.
pub fn route_channel() -> (watch::Sender<Route>, watch::Receiver<Route>) {
    watch::channel(Route::Home)
}
