use serde::Deserialize;
use validator::Validate;

use crate::domain::phone::{Availability, NewPhone, Specifications};
use crate::domain::types::PhoneName;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// One catalog entry as exported by the storefront. Any `id` is ignored.
pub struct ImportPhoneForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub brand: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub phone_type: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub features: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub reviews: i32,
    #[serde(default)]
    pub availability: Availability,
}

impl TryFrom<ImportPhoneForm> for NewPhone {
    type Error = FormError;

    fn try_from(form: ImportPhoneForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = PhoneName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let mut phone = NewPhone::new(name, form.brand, form.phone_type, form.price)
            .image(form.image)
            .specifications(form.specifications)
            .features(form.features)
            .rating(form.rating)
            .reviews(form.reviews)
            .availability(form.availability);
        phone.original_price = form.original_price;

        Ok(phone)
    }
}
