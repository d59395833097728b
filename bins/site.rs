use std::sync::Arc;

use dotenvy::dotenv;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use client::ApiClient;
use common::TokenStore;
use site::{hero_channel, route_channel, spawn_rotation, HomePage, Navbar, Route, ROTATION_PERIOD};

fn init_logging() {
    // Load .env early so RUST_LOG and friends take effect.
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "site", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        move |info| {
            error!(
                service = "site",
                event = "panic",
                %instance_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    let cfg = match configs::SiteConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "site", event = "config_invalid", error = %e, "configuration rejected");
            return std::process::ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "site", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "site",
        event = "start",
        %instance_id,
        pid,
        version,
        base_url = %cfg.api.base_url,
        "site starting"
    );

    match rt.block_on(run(cfg)) {
        Ok(()) => {
            info!(service = "site", event = "stop", %instance_id, pid, "site stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "site", event = "run_failed", error = %e, "site exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cfg: configs::SiteConfig) -> anyhow::Result<()> {
    // The one configured client; everything downstream borrows it.
    let tokens = Arc::new(TokenStore::open(&cfg.auth.token_path)?);
    let client = ApiClient::new(&cfg.api, tokens)?;
    let mut redirects = client.session().subscribe();

    let (hero_tx, hero_rx) = hero_channel();
    let (route_tx, route_rx) = route_channel();

    let mut page = HomePage::new(hero_tx);
    page.load(&client).await;
    if let Some(err) = &page.load_error {
        error!(error = %err, "initial project fetch failed; rotation stays idle");
    } else {
        info!(projects = page.projects().len(), "home page loaded");
    }

    let page = Arc::new(Mutex::new(page));
    let _rotation = spawn_rotation(Arc::clone(&page), ROTATION_PERIOD);

    let mut navbar = Navbar::new(hero_rx, route_rx);

    loop {
        tokio::select! {
            frame = navbar.next_frame() => {
                match frame {
                    Some(frame) => info!(
                        index = frame.index,
                        image = frame.image_url.as_deref().unwrap_or("-"),
                        "hero frame advanced"
                    ),
                    None => break,
                }
            }
            changed = redirects.changed() => {
                if changed.is_ok() && redirects.borrow_and_update().is_some() {
                    info!("session unauthorized; routing to login");
                    route_tx.send_replace(Route::Login);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!(service = "site", event = "shutdown_signal", "received Ctrl+C, shutting down");
                break;
            }
        }
    }
    Ok(())
}
