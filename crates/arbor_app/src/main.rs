#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::mpsc;
use std::time::Duration;

use gpui::*;
use tracing::{error, info, warn};

use arbor_core::config::ArborConfig;
use arbor_core::logging;
use arbor_core::version::VersionChecker;
use arbor_ui::globals::{AppConfig, AppVersionCheck};
use arbor_ui::workspace::ArborWorkspace;
use arbor_ui_core::actions::{Quit, ToggleSidebar};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

/// Initialize backend services and store them as GPUI globals.
fn init_services(cx: &mut App) -> anyhow::Result<()> {
    let config = ArborConfig::load().inspect_err(|e| error!("Config load failed: {e}"))?;
    info!(
        "Config loaded (sidebar_default_open={})",
        config.sidebar_default_open
    );
    cx.set_global(AppConfig(config));

    cx.set_global(AppVersionCheck(VersionChecker::new(VERSION)));
    info!("VersionChecker initialized (current: v{VERSION})");

    Ok(())
}

/// Register global keyboard shortcuts and app-level action handlers.
fn register_actions(cx: &mut App) {
    // macOS uses Cmd for shortcuts; all other platforms use Ctrl.
    #[cfg(target_os = "macos")]
    cx.bind_keys([
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("cmd-b", ToggleSidebar, None),
    ]);
    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("ctrl-b", ToggleSidebar, None),
    ]);

    cx.on_action(|_: &Quit, cx: &mut App| {
        info!("Quit action triggered");
        cx.quit();
    });
}

/// Build the main window options.
fn window_options(cx: &App) -> WindowOptions {
    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            size(px(1280.0), px(800.0)),
            cx,
        ))),
        titlebar: Some(gpui_component::TitleBar::title_bar_options()),
        ..Default::default()
    }
}

/// Open the main application window.
fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    cx.open_window(window_options(cx), |window, cx| {
        let workspace = cx.new(|cx| ArborWorkspace::new(cx));

        workspace.update(cx, |ws, _cx| {
            ws.set_version(VERSION.to_string());
        });

        cx.new(|cx| gpui_component::Root::new(workspace.clone(), window, cx))
    })?;

    info!("Arbor v{VERSION} window opened");
    Ok(())
}

/// Background version check -- runs 5 s after startup. The blocking HTTP
/// call runs on an OS thread; the result is polled on the main thread, and
/// the global is marked changed so workspaces re-read the cached notice.
/// Failures are logged and ignored; the UI never blocks on this path.
fn spawn_version_check(cx: &mut App) {
    if !cx.has_global::<AppConfig>() || !cx.has_global::<AppVersionCheck>() {
        return;
    }
    if !cx.global::<AppConfig>().0.auto_update {
        info!("Version check disabled by config");
        return;
    }

    let checker = cx.global::<AppVersionCheck>().0.clone();
    cx.spawn(async move |app: &mut AsyncApp| {
        app.background_executor()
            .timer(Duration::from_secs(5))
            .await;

        let checker_clone = checker.clone();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let result = checker_clone.check();
            let _ = tx.send(result);
        });

        let check_result = loop {
            match rx.try_recv() {
                Ok(result) => break result,
                Err(mpsc::TryRecvError::Empty) => {
                    app.background_executor()
                        .timer(Duration::from_millis(500))
                        .await;
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    break Err(anyhow::anyhow!("Version check thread died"));
                }
            }
        };

        match check_result {
            Ok(Some(notice)) => {
                info!(
                    "Update available: v{} (release: {})",
                    notice.version, notice.release_url
                );
                // The notice is cached on the checker; poke the global so
                // observers re-read it.
                let _ = app.update(|cx| {
                    cx.update_global::<AppVersionCheck, _>(|_, _| {});
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Version check failed: {e:#}");
            }
        }
    })
    .detach();
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let _log_guard = logging::init_logging().expect("Failed to initialize logging");
    info!("Starting Arbor v{VERSION}");

    ArborConfig::ensure_dirs().expect("Failed to create config directories");

    Application::new().run(|cx| {
        gpui_component::init(cx);

        if let Err(e) = init_services(cx) {
            error!("Service initialization failed: {e:#}");
        }

        register_actions(cx);

        open_main_window(cx).expect("Failed to open window");

        // Bring the app to the foreground; running the binary directly may
        // otherwise leave it behind other windows.
        cx.activate(true);

        spawn_version_check(cx);
    });
}
