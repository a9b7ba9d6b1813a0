use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        phone::{NewPhone, Phone, UpdatePhone},
        types::PhoneId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod phone;

/// How a text column is compared against a criterion. Both forms ignore case.
#[derive(Debug, Clone, PartialEq)]
pub enum TextMatch {
    Equals(String),
    Contains(String),
}

/// Optional predicates applied by [`PhoneReader::list_phones`].
///
/// Every recorded predicate narrows the result; an empty query lists the whole
/// catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneListQuery {
    pub brand: Option<TextMatch>,
    pub phone_type: Option<TextMatch>,
    pub name: Option<TextMatch>,
    pub price: Option<(f64, f64)>,
    pub min_rating: Option<f64>,
    pub availability: Option<String>,
}

impl PhoneListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand_equals(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(TextMatch::Equals(brand.into()));
        self
    }

    pub fn brand_contains(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(TextMatch::Contains(brand.into()));
        self
    }

    pub fn type_equals(mut self, phone_type: impl Into<String>) -> Self {
        self.phone_type = Some(TextMatch::Equals(phone_type.into()));
        self
    }

    pub fn type_contains(mut self, phone_type: impl Into<String>) -> Self {
        self.phone_type = Some(TextMatch::Contains(phone_type.into()));
        self
    }

    pub fn name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(TextMatch::Contains(fragment.into()));
        self
    }

    /// Inclusive on both ends.
    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.price = Some((min, max));
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Exact, case-sensitive match on the stored status text.
    pub fn availability(mut self, status: impl Into<String>) -> Self {
        self.availability = Some(status.into());
        self
    }
}

pub trait PhoneReader {
    fn get_phone_by_id(&self, id: PhoneId) -> RepositoryResult<Option<Phone>>;
    fn list_phones(&self, query: PhoneListQuery) -> RepositoryResult<Vec<Phone>>;
}

pub trait PhoneWriter {
    fn create_phones(&self, new_phones: &[NewPhone]) -> RepositoryResult<usize>;
    fn update_phone(&self, phone_id: PhoneId, updates: &UpdatePhone) -> RepositoryResult<Phone>;
    fn delete_phone(&self, phone_id: PhoneId) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_predicates() {
        assert_eq!(PhoneListQuery::new(), PhoneListQuery::default());
    }

    #[test]
    fn builder_records_each_predicate() {
        let query = PhoneListQuery::new()
            .brand_contains("sam")
            .type_equals("Flagship")
            .price_between(100.0, 200.0)
            .min_rating(4.0)
            .availability("in-stock")
            .name_contains("Ultra");

        assert_eq!(query.brand, Some(TextMatch::Contains("sam".into())));
        assert_eq!(query.phone_type, Some(TextMatch::Equals("Flagship".into())));
        assert_eq!(query.price, Some((100.0, 200.0)));
        assert_eq!(query.min_rating, Some(4.0));
        assert_eq!(query.availability.as_deref(), Some("in-stock"));
        assert_eq!(query.name, Some(TextMatch::Contains("Ultra".into())));
    }

    #[test]
    fn later_setter_replaces_earlier_one() {
        let query = PhoneListQuery::new().brand_equals("Apple").brand_contains("app");
        assert_eq!(query.brand, Some(TextMatch::Contains("app".into())));
    }
}
