use tokio::sync::watch;

/// One frame of the rotating hero background: the image to show (if any
/// project carries one) and the rotation index it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroFrame {
    pub image_url: Option<String>,
    pub index: usize,
}

/// The shared observable linking the home page to the navbar. The home page
/// publishes on the sender; the navbar (or anything else) watches the
/// receiver. An explicit channel both sides are handed, not a global.
pub fn hero_channel() -> (watch::Sender<HeroFrame>, watch::Receiver<HeroFrame>) {
    watch::channel(HeroFrame::default())
}
