pub mod commands;
pub mod config;
pub mod door;
pub mod i18n;
pub mod settings;
pub mod state;

use std::sync::Mutex;
use std::time::Duration;
use tauri::{Emitter, Manager};

use config::AppConfig;
use i18n::Messages;
use settings::Settings;
use state::{AppState, HOLD_DURATION_MS, SUCCESS_RESET_MS};

pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .setup(|app| {
            let config = AppConfig::new();
            config.ensure_dirs().expect("Failed to create app directories");

            let user_settings = Settings::load(&config.data_dir);
            log::info!(
                "Loaded settings: endpoint={} language={}",
                user_settings.api_url,
                user_settings.language
            );

            let initial_state = AppState::new(i18n::messages(user_settings.language()));

            app.manage(reqwest::Client::new());
            app.manage(Mutex::new(initial_state));
            app.manage(Mutex::new(user_settings));
            app.manage(config);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::press_start,
            commands::press_end,
            commands::get_display,
            commands::get_progress,
            commands::get_messages,
            commands::get_settings,
            commands::save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Translation table for the currently active language.
fn active_messages(app: &tauri::AppHandle) -> &'static Messages {
    let settings = app.state::<Mutex<Settings>>();
    let language = settings.lock().unwrap().language();
    i18n::messages(language)
}

pub(crate) fn emit_display(app: &tauri::AppHandle) {
    let state = app.state::<Mutex<AppState>>();
    let snapshot = state.lock().unwrap().snapshot();
    let _ = app.emit("display-changed", snapshot);
}

/// Arm the hold countdown for one press. The task always runs to the end;
/// whether it still matters is decided against the epoch when it fires.
pub(crate) fn spawn_hold_timer(app: tauri::AppHandle, epoch: u64) {
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(Duration::from_millis(HOLD_DURATION_MS)).await;
        hold_elapsed_flow(&app, epoch).await;
    });
}

/// The hold countdown fired: enter Loading, issue the one door request,
/// apply its outcome and schedule the success auto-reset when needed.
async fn hold_elapsed_flow(app: &tauri::AppHandle, epoch: u64) {
    let fire = {
        let state = app.state::<Mutex<AppState>>();
        let mut s = state.lock().unwrap();
        s.hold_elapsed(epoch, active_messages(app))
    };
    if !fire {
        return;
    }
    emit_display(app);

    let url = {
        let settings = app.state::<Mutex<Settings>>();
        let s = settings.lock().unwrap();
        s.api_url.clone()
    };
    log::info!("Hold complete, triggering door at {}", url);

    let client = app.state::<reqwest::Client>();
    let outcome = door::open(&client, &url).await;
    log::info!("Door outcome: {:?}", outcome);

    let reset_epoch = {
        let state = app.state::<Mutex<AppState>>();
        let mut s = state.lock().unwrap();
        let auto_reset = s.finish(&outcome, active_messages(app));
        auto_reset.then(|| s.epoch())
    };
    emit_display(app);

    if let Some(epoch) = reset_epoch {
        spawn_success_reset(app.clone(), epoch);
    }
}

/// Revert the success message to the default title after its display
/// window, unless a newer hold took over in the meantime.
fn spawn_success_reset(app: tauri::AppHandle, epoch: u64) {
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(Duration::from_millis(SUCCESS_RESET_MS)).await;
        {
            let state = app.state::<Mutex<AppState>>();
            let mut s = state.lock().unwrap();
            s.reset_display(epoch, active_messages(&app));
        }
        emit_display(&app);
    });
}
