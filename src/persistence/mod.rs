use std::{
    fmt::Display,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::FlashError;

const APP_NAME: &str = "flashstudy";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

fn local_file_error(path: &Path, reason: impl Display) -> FlashError {
    FlashError::LocalFile { path: path.display().to_string(), reason: reason.to_string() }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), FlashError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data).map_err(|e| local_file_error(&file_path, e))?;
    fs::write(&file_path, json).map_err(|e| local_file_error(&file_path, e))?;
    debug!(path = %file_path.display(), "Data saved");
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T, FlashError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path).map_err(|e| local_file_error(&file_path, e))?;
    let data: T = serde_json::from_str(&json).map_err(|e| local_file_error(&file_path, e))?;
    debug!(path = %file_path.display(), "Data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            warn!(filename, error = %e, "Failed to load data file, using defaults");
            T::default()
        }
    }
}
