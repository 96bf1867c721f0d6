#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::{info, Level};

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {err}");
    }
    info!(version = %version_label(), "starting {APP_NAME}");

    #[cfg(feature = "desktop")]
    disable_dmabuf_on_wayland();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(LogicalSize::new(720.0, 960.0))
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

/// WebKit's DMABUF renderer crashes on some Wayland drivers; turn it off unless the user set it.
#[cfg(feature = "desktop")]
fn disable_dmabuf_on_wayland() {
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }
}
