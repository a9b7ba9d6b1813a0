use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PhoneId, PhoneName};

/// Stock status of a catalog phone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    #[default]
    InStock,
    Limited,
    OutOfStock,
    Other(String),
}

impl Availability {
    /// Text stored in the `availability` column.
    pub fn as_str(&self) -> &str {
        match self {
            Availability::InStock => "in-stock",
            Availability::Limited => "limited",
            Availability::OutOfStock => "out-of-stock",
            Availability::Other(s) => s,
        }
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Availability {
    fn from(s: &str) -> Self {
        match s {
            "in-stock" => Availability::InStock,
            "limited" => Availability::Limited,
            "out-of-stock" => Availability::OutOfStock,
            _ => Availability::Other(s.to_string()),
        }
    }
}

impl From<String> for Availability {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// Hardware summary shown on the phone details page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Specifications {
    pub display: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub camera: String,
    pub battery: String,
    pub os: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub id: PhoneId,
    pub name: PhoneName,
    pub brand: String,
    #[serde(rename = "type")]
    pub phone_type: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub specifications: Specifications,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: i32,
    pub availability: Availability,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Phone payload accepted by [`crate::repository::PhoneWriter::create_phones`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewPhone {
    pub name: PhoneName,
    pub brand: String,
    pub phone_type: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub specifications: Specifications,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: i32,
    pub availability: Availability,
}

impl NewPhone {
    /// Creates a phone with the required catalog fields; the rest start empty.
    #[must_use]
    pub fn new(
        name: PhoneName,
        brand: impl Into<String>,
        phone_type: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name,
            brand: brand.into().trim().to_string(),
            phone_type: phone_type.into().trim().to_string(),
            price,
            original_price: None,
            image: String::new(),
            specifications: Specifications::default(),
            features: Vec::new(),
            rating: 0.0,
            reviews: 0,
            availability: Availability::default(),
        }
    }

    pub fn original_price(mut self, price: f64) -> Self {
        self.original_price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn specifications(mut self, specifications: Specifications) -> Self {
        self.specifications = specifications;
        self
    }

    pub fn features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn reviews(mut self, reviews: i32) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }
}

/// Full replacement of a phone's editable fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePhone {
    pub name: PhoneName,
    pub brand: String,
    pub phone_type: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub specifications: Specifications,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: i32,
    pub availability: Availability,
}

impl From<NewPhone> for UpdatePhone {
    fn from(phone: NewPhone) -> Self {
        Self {
            name: phone.name,
            brand: phone.brand,
            phone_type: phone.phone_type,
            price: phone.price,
            original_price: phone.original_price,
            image: phone.image,
            specifications: phone.specifications,
            features: phone.features,
            rating: phone.rating,
            reviews: phone.reviews,
            availability: phone.availability,
        }
    }
}

impl From<Phone> for UpdatePhone {
    fn from(phone: Phone) -> Self {
        Self {
            name: phone.name,
            brand: phone.brand,
            phone_type: phone.phone_type,
            price: phone.price,
            original_price: phone.original_price,
            image: phone.image,
            specifications: phone.specifications,
            features: phone.features,
            rating: phone.rating,
            reviews: phone.reviews,
            availability: phone.availability,
        }
    }
}
