//! Inputs accepted by the phone lookup services.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Independently optional criteria for [`crate::services::phones::find_with_filters`].
///
/// Unset criteria match every phone. Brand and type are case-insensitive
/// substrings, the price range applies only when both bounds are set and the
/// rating is a lower bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneFilters {
    pub brand: Option<String>,
    pub phone_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid price range: {0}")]
pub struct ParsePriceRangeError(String);

/// Price bucket selected in the search form: `"<min>-<max>"` or `"<min>+"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl FromStr for PriceRange {
    type Err = ParsePriceRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParsePriceRangeError(s.to_string());
        let parse = |v: &str| v.trim().parse::<f64>().map_err(|_| invalid());

        if let Some(min) = s.strip_suffix('+') {
            return Ok(Self {
                min: parse(min)?,
                max: f64::MAX,
            });
        }

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        Ok(Self {
            min: parse(min)?,
            max: parse(max)?,
        })
    }
}

/// Query parameters sent by the catalog search form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneSearchParams {
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
    pub price_range: Option<String>,
    pub min_rating: Option<f64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl TryFrom<PhoneSearchParams> for PhoneFilters {
    type Error = ParsePriceRangeError;

    fn try_from(params: PhoneSearchParams) -> Result<Self, Self::Error> {
        let price = non_blank(params.price_range)
            .map(|range| range.parse::<PriceRange>())
            .transpose()?;

        Ok(Self {
            brand: non_blank(params.brand),
            phone_type: non_blank(params.phone_type),
            min_price: price.map(|p| p.min),
            max_price: price.map(|p| p.max),
            min_rating: params.min_rating,
        })
    }
}
