use std::sync::Mutex;
use tauri::{AppHandle, State};

use crate::config::AppConfig;
use crate::i18n::{self, Messages};
use crate::settings::Settings;
use crate::state::{AppState, Snapshot};

/// Pointer down on the hold button. Silently ignored while a request is in
/// flight; otherwise starts the hold countdown.
#[tauri::command]
pub fn press_start(app: AppHandle, state: State<'_, Mutex<AppState>>) -> Result<(), String> {
    let epoch = {
        let mut s = state.lock().map_err(|e| e.to_string())?;
        s.press()
    };
    if let Some(epoch) = epoch {
        log::info!("Hold started (epoch {})", epoch);
        crate::emit_display(&app);
        crate::spawn_hold_timer(app, epoch);
    }
    Ok(())
}

/// Pointer up. Cancels a pending hold; a no-op once the request is loading.
#[tauri::command]
pub fn press_end(app: AppHandle, state: State<'_, Mutex<AppState>>) -> Result<(), String> {
    {
        let mut s = state.lock().map_err(|e| e.to_string())?;
        s.release();
    }
    crate::emit_display(&app);
    Ok(())
}

#[tauri::command]
pub fn get_display(state: State<'_, Mutex<AppState>>) -> Result<Snapshot, String> {
    let s = state.lock().map_err(|e| e.to_string())?;
    Ok(s.snapshot())
}

#[tauri::command]
pub fn get_progress(state: State<'_, Mutex<AppState>>) -> Result<f32, String> {
    let s = state.lock().map_err(|e| e.to_string())?;
    Ok(s.progress())
}

#[tauri::command]
pub fn get_settings(settings: State<'_, Mutex<Settings>>) -> Result<Settings, String> {
    let s = settings.lock().map_err(|e| e.to_string())?;
    Ok(s.clone())
}

/// Translation table for the active language, for the frontend's static
/// labels.
#[tauri::command]
pub fn get_messages(settings: State<'_, Mutex<Settings>>) -> Result<Messages, String> {
    let s = settings.lock().map_err(|e| e.to_string())?;
    Ok(*i18n::messages(s.language()))
}

/// Explicit save from the settings modal. Persists both fields first, then
/// applies the staged values as the active settings, so a failed write
/// leaves the previous settings untouched.
#[tauri::command]
pub fn save_settings(
    app: AppHandle,
    api_url: String,
    language: String,
    settings: State<'_, Mutex<Settings>>,
    state: State<'_, Mutex<AppState>>,
    config: State<'_, AppConfig>,
) -> Result<Settings, String> {
    let staged = Settings { api_url, language };
    staged.save(&config.data_dir)?;

    {
        let mut s = settings.lock().map_err(|e| e.to_string())?;
        *s = staged.clone();
    }
    {
        let mut s = state.lock().map_err(|e| e.to_string())?;
        s.relocalize(i18n::messages(staged.language()));
    }
    crate::emit_display(&app);

    log::info!(
        "Settings saved: endpoint={} language={}",
        staged.api_url,
        staged.language
    );
    Ok(staged)
}
