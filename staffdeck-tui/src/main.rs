mod app;
mod paths;
mod screens;
mod ui;
mod widgets;

use std::fs;
use std::fs::File;
use std::sync::Arc;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use staffdeck_lib::prefs::{PrefsProvider, SqlitePrefsBackend};
use staffdeck_lib::store::{EmployeeStore, SqliteEmployeeBackend};

use crate::app::App;

#[tokio::main]
async fn main() {
    paths::rotate_logs();
    init_logging();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    if let Some(dir) = paths::cache_dir() {
        let _ = fs::create_dir_all(&dir);
    }
    let path = paths::log_file().unwrap_or_else(|| "staffdeck.log".into());
    if let Ok(file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data = paths::data_dir().ok_or("cannot determine a data directory")?;
    fs::create_dir_all(&data)?;

    let employees_db = paths::employees_db().ok_or("cannot determine the database path")?;
    let prefs_db = paths::prefs_db().ok_or("cannot determine the preferences path")?;

    let backend = Arc::new(SqliteEmployeeBackend::new(employees_db).await?);
    let prefs = PrefsProvider::new(SqlitePrefsBackend::new(prefs_db).await?);
    let store = EmployeeStore::open(backend, prefs.clone()).await?;

    App::new(store, prefs).await?.run().await?;
    Ok(())
}
