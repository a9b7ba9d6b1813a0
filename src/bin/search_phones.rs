//! Runs a catalog search and prints the matching phones as JSON.
//!
//! Usage: `search_phones [brand=<text>] [type=<text>] [price=<min>-<max>|<min>+] [rating=<min>]`

use std::env;

use dotenvy::dotenv;

use phone_finder::db::establish_connection_pool;
use phone_finder::dto::phones::PhoneSearchParams;
use phone_finder::models::config::AppConfig;
use phone_finder::repository::DieselRepository;
use phone_finder::services::phones::search_phones;

fn parse_args<I>(args: I) -> Result<PhoneSearchParams, String>
where
    I: IntoIterator<Item = String>,
{
    let mut params = PhoneSearchParams::default();

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{arg}`"))?;
        match key {
            "brand" => params.brand = Some(value.to_string()),
            "type" => params.phone_type = Some(value.to_string()),
            "price" => params.price_range = Some(value.to_string()),
            "rating" => {
                let rating = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid rating `{value}`"))?;
                params.min_rating = Some(rating);
            }
            _ => return Err(format!("unknown filter `{key}`")),
        }
    }

    Ok(params)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let params = match parse_args(env::args().skip(1)) {
        Ok(params) => params,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
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

    let phones = match search_phones(&repo, params) {
        Ok(phones) => phones,
        Err(err) => {
            log::error!("Search failed: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Found {} phones", phones.len());

    match serde_json::to_string_pretty(&phones) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize phones: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_every_filter() {
        let params =
            parse_args(args(&["brand=Sam", "type=Gaming", "price=0-20000", "rating=4.2"])).unwrap();

        assert_eq!(params.brand.as_deref(), Some("Sam"));
        assert_eq!(params.phone_type.as_deref(), Some("Gaming"));
        assert_eq!(params.price_range.as_deref(), Some("0-20000"));
        assert_eq!(params.min_rating, Some(4.2));
    }

    #[test]
    fn no_arguments_means_no_filters() {
        let params = parse_args(Vec::new()).unwrap();
        assert!(params.brand.is_none());
        assert!(params.min_rating.is_none());
    }

    #[test]
    fn rejects_unknown_keys_and_bare_words() {
        assert!(parse_args(args(&["color=red"])).is_err());
        assert!(parse_args(args(&["Samsung"])).is_err());
        assert!(parse_args(args(&["rating=high"])).is_err());
    }
}
