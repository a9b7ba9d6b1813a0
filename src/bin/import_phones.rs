//! Loads a storefront JSON export into the phone catalog.
//!
//! Usage: `import_phones <phones.json>`

use std::env;

use dotenvy::dotenv;

use phone_finder::db::establish_connection_pool;
use phone_finder::domain::phone::NewPhone;
use phone_finder::forms::FormError;
use phone_finder::forms::phones::ImportPhoneForm;
use phone_finder::models::config::AppConfig;
use phone_finder::repository::DieselRepository;
use phone_finder::services::phones::create_phones;

/// Parses the export and converts every record, reporting the first bad one by position.
fn parse_catalog(json: &str) -> Result<Vec<NewPhone>, String> {
    let forms: Vec<ImportPhoneForm> =
        serde_json::from_str(json).map_err(|e| format!("Malformed catalog file: {e}"))?;

    forms
        .into_iter()
        .enumerate()
        .map(|(idx, form)| {
            NewPhone::try_from(form).map_err(|e: FormError| format!("Record #{idx}: {e}"))
        })
        .collect()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            log::error!("Usage: import_phones <phones.json>");
            std::process::exit(2);
        }
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            log::error!("Cannot read {path}: {err}");
            std::process::exit(1);
        }
    };

    let new_phones = match parse_catalog(&contents) {
        Ok(new_phones) => new_phones,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let app_config = match AppConfig::load() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match create_phones(&repo, &new_phones) {
        Ok(inserted) => log::info!("Imported {inserted} phones from {path}"),
        Err(err) => {
            log::error!("Import failed: {err}");
            std::process::exit(1);
        }
    }
}
