use tokio::sync::watch;

use crate::hero::HeroFrame;
use crate::route::Route;

/// Navigation-bar view state. Mirrors the home page's hero background while
/// the visitor is on the home route and shows nothing anywhere else.
pub struct Navbar {
    hero: watch::Receiver<HeroFrame>,
    route: watch::Receiver<Route>,
}

impl Navbar {
    pub fn new(hero: watch::Receiver<HeroFrame>, route: watch::Receiver<Route>) -> Self {
        Self { hero, route }
    }

    /// The background to paint right now, gated on the active route.
    pub fn background_image(&self) -> Option<String> {
        if *self.route.borrow() != Route::Home {
            return None;
        }
        self.hero.borrow().image_url.clone()
    }

    /// Await the next hero frame; `None` when the home page went away.
    pub async fn next_frame(&mut self) -> Option<HeroFrame> {
        self.hero.changed().await.ok()?;
        Some(self.hero.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::hero_channel;
    use crate::route::route_channel;

    #[test]
    fn mirrors_hero_on_home_route() {
        let (hero_tx, hero_rx) = hero_channel();
        let (_route_tx, route_rx) = route_channel();
        let navbar = Navbar::new(hero_rx, route_rx);

        hero_tx.send_replace(HeroFrame { image_url: Some("hero.jpg".into()), index: 2 });
        assert_eq!(navbar.background_image().as_deref(), Some("hero.jpg"));
    }

    #[test]
    fn clears_background_off_home() {
        let (hero_tx, hero_rx) = hero_channel();
        let (route_tx, route_rx) = route_channel();
        let navbar = Navbar::new(hero_rx, route_rx);

        hero_tx.send_replace(HeroFrame { image_url: Some("hero.jpg".into()), index: 0 });
        route_tx.send_replace(Route::Projects);
        assert_eq!(navbar.background_image(), None);

        // Back home the mirror resumes without a new broadcast.
        route_tx.send_replace(Route::Home);
        assert_eq!(navbar.background_image().as_deref(), Some("hero.jpg"));
    }
}
