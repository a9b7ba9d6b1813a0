//! Diesel models for the phone catalog.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::phone::{
    Availability, NewPhone as DomainNewPhone, Phone as DomainPhone,
    UpdatePhone as DomainUpdatePhone,
};
use crate::domain::types::{PhoneId, PhoneName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::phones)]
/// Diesel model for [`crate::domain::phone::Phone`].
pub struct Phone {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub phone_type: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub specifications: String, // JSON object text
    pub features: String,       // JSON array text
    pub rating: f64,
    pub reviews: i32,
    pub availability: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::phones)]
#[diesel(treat_none_as_default_value = false)]
/// Insertable form of [`Phone`].
pub struct NewPhone<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub phone_type: &'a str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: &'a str,
    pub specifications: String,
    pub features: String,
    pub rating: f64,
    pub reviews: i32,
    pub availability: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::phones)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Phone`] record.
pub struct UpdatePhone<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub phone_type: &'a str,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: &'a str,
    pub specifications: String,
    pub features: String,
    pub rating: f64,
    pub reviews: i32,
    pub availability: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Phone> for DomainPhone {
    type Error = TypeConstraintError;

    fn try_from(phone: Phone) -> Result<Self, Self::Error> {
        let specifications = serde_json::from_str(&phone.specifications).unwrap_or_default();
        let features = serde_json::from_str(&phone.features).unwrap_or_default();

        Ok(Self {
            id: PhoneId::try_from(phone.id)?,
            name: PhoneName::new(phone.name)?,
            brand: phone.brand,
            phone_type: phone.phone_type,
            price: phone.price,
            original_price: phone.original_price,
            image: phone.image,
            specifications,
            features,
            rating: phone.rating,
            reviews: phone.reviews,
            availability: Availability::from(phone.availability),
            created_at: phone.created_at,
            updated_at: phone.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPhone> for NewPhone<'a> {
    fn from(phone: &'a DomainNewPhone) -> Self {
        Self {
            name: phone.name.as_str(),
            brand: phone.brand.as_str(),
            phone_type: phone.phone_type.as_str(),
            price: phone.price,
            original_price: phone.original_price,
            image: phone.image.as_str(),
            specifications: json_text(&phone.specifications, "{}"),
            features: json_text(&phone.features, "[]"),
            rating: phone.rating,
            reviews: phone.reviews,
            availability: phone.availability.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePhone> for UpdatePhone<'a> {
    fn from(phone: &'a DomainUpdatePhone) -> Self {
        Self {
            name: phone.name.as_str(),
            brand: phone.brand.as_str(),
            phone_type: phone.phone_type.as_str(),
            price: phone.price,
            original_price: phone.original_price,
            image: phone.image.as_str(),
            specifications: json_text(&phone.specifications, "{}"),
            features: json_text(&phone.features, "[]"),
            rating: phone.rating,
            reviews: phone.reviews,
            availability: phone.availability.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

fn json_text<T: serde::Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}
