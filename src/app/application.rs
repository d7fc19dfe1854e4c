//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::assets::Assets;
use crate::helpers::{new_key_bindings, MenuAction};
use crate::states::{NoticeState, RosterGlobalStore, RosterSettings};
use crate::views::RosterRoot;

const WINDOW_TITLE: &str = "User Roster";

/// Run the roster application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global store
        let settings = RosterSettings::load_or_default();
        let saved_bounds = settings.bounds().cloned();
        let store = RosterGlobalStore::new(cx.new(|_| settings), cx.new(|_| NoticeState::new()));
        cx.set_global(store);

        // Create main window
        let bounds = saved_bounds
            .unwrap_or_else(|| Bounds::centered(None, gpui::size(px(1100.0), px(760.0)), cx));
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| RosterRoot::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });

        match opened {
            Ok(_) => info!(title = WINDOW_TITLE, "Window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open window");
                cx.quit();
            }
        }

        cx.activate(true);
    });
}
