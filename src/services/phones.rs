//! Phone catalog lookups.
//!
//! Every function takes the store handle explicitly. A lookup without matches
//! returns an empty list; only store failures are errors.

use crate::domain::phone::{NewPhone, Phone, UpdatePhone};
use crate::domain::types::PhoneId;
use crate::dto::phones::{PhoneFilters, PhoneSearchParams};
use crate::repository::{PhoneListQuery, PhoneReader, PhoneWriter};
use crate::services::{ServiceError, ServiceResult};

fn list<R>(repo: &R, query: PhoneListQuery) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    repo.list_phones(query).map_err(|err| {
        log::error!("Failed to list phones: {err}");
        ServiceError::from(err)
    })
}

/// Phones whose brand equals `brand`, ignoring case.
pub fn find_by_brand<R>(repo: &R, brand: &str) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().brand_equals(brand))
}

/// Phones whose type equals `phone_type`, ignoring case.
pub fn find_by_type<R>(repo: &R, phone_type: &str) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().type_equals(phone_type))
}

/// Phones priced within `min..=max`. An inverted range yields nothing.
pub fn find_by_price_range<R>(repo: &R, min: f64, max: f64) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().price_between(min, max))
}

pub fn find_by_min_rating<R>(repo: &R, min_rating: f64) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().min_rating(min_rating))
}

pub fn find_by_availability<R>(repo: &R, status: &str) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().availability(status))
}

/// Phones whose name contains `fragment`, ignoring case.
pub fn find_by_name_substring<R>(repo: &R, fragment: &str) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new().name_contains(fragment))
}

/// Applies every criterion present in `filters`, combined with AND.
pub fn find_with_filters<R>(repo: &R, filters: &PhoneFilters) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    let mut query = PhoneListQuery::new();

    if let Some(brand) = &filters.brand {
        query = query.brand_contains(brand.as_str());
    }
    if let Some(phone_type) = &filters.phone_type {
        query = query.type_contains(phone_type.as_str());
    }
    if let (Some(min), Some(max)) = (filters.min_price, filters.max_price) {
        query = query.price_between(min, max);
    }
    if let Some(rating) = filters.min_rating {
        query = query.min_rating(rating);
    }

    list(repo, query)
}

/// Runs the storefront search form against the catalog.
pub fn search_phones<R>(repo: &R, params: PhoneSearchParams) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    let filters = PhoneFilters::try_from(params)
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;
    find_with_filters(repo, &filters)
}

pub fn list_phones<R>(repo: &R) -> ServiceResult<Vec<Phone>>
where
    R: PhoneReader + ?Sized,
{
    list(repo, PhoneListQuery::new())
}

pub fn get_phone<R>(repo: &R, phone_id: PhoneId) -> ServiceResult<Option<Phone>>
where
    R: PhoneReader + ?Sized,
{
    repo.get_phone_by_id(phone_id).map_err(ServiceError::from)
}

pub fn create_phones<R>(repo: &R, new_phones: &[NewPhone]) -> ServiceResult<usize>
where
    R: PhoneWriter + ?Sized,
{
    repo.create_phones(new_phones).map_err(|err| {
        log::error!("Failed to create phones: {err}");
        ServiceError::from(err)
    })
}

pub fn update_phone<R>(repo: &R, phone_id: PhoneId, updates: &UpdatePhone) -> ServiceResult<Phone>
where
    R: PhoneWriter + ?Sized,
{
    repo.update_phone(phone_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_phone<R>(repo: &R, phone_id: PhoneId) -> ServiceResult<()>
where
    R: PhoneWriter + ?Sized,
{
    repo.delete_phone(phone_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::phone::{Availability, Specifications};
    use crate::domain::types::PhoneName;
    use crate::repository::TextMatch;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn phone(id: i32, name: &str, brand: &str, rating: f64) -> Phone {
        let now = Utc::now().naive_utc();
        Phone {
            id: PhoneId::new(id).expect("valid phone id"),
            name: PhoneName::new(name).expect("valid name"),
            brand: brand.to_string(),
            phone_type: "Flagship".to_string(),
            price: 50000.0,
            original_price: None,
            image: String::new(),
            specifications: Specifications::default(),
            features: Vec::new(),
            rating,
            reviews: 0,
            availability: Availability::InStock,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn find_by_brand_requests_exact_match() {
        let mut repo = MockRepository::new();
        let stored = vec![phone(1, "Galaxy S24", "Samsung", 4.5)];
        repo.expect_list_phones()
            .withf(|query| {
                *query == PhoneListQuery::new().brand_equals("samsung")
            })
            .times(1)
            .returning(move |_| Ok(stored.clone()));

        let phones = find_by_brand(&repo, "samsung").expect("lookup should succeed");

        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].brand, "Samsung");
    }

    #[test]
    fn find_with_filters_without_criteria_lists_everything() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones()
            .withf(|query| *query == PhoneListQuery::default())
            .times(1)
            .returning(|_| Ok(vec![phone(1, "A", "Apple", 4.0), phone(2, "B", "Google", 3.0)]));

        let phones = find_with_filters(&repo, &PhoneFilters::default()).unwrap();

        assert_eq!(phones.len(), 2);
    }

    #[test]
    fn find_with_filters_combines_brand_substring_and_rating() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones()
            .withf(|query| {
                query.brand == Some(TextMatch::Contains("Sam".into()))
                    && query.min_rating == Some(4.0)
                    && query.phone_type.is_none()
                    && query.price.is_none()
            })
            .times(1)
            .returning(|_| Ok(vec![phone(1, "Galaxy S24", "Samsung", 4.5)]));

        let filters = PhoneFilters {
            brand: Some("Sam".into()),
            min_rating: Some(4.0),
            ..PhoneFilters::default()
        };

        let phones = find_with_filters(&repo, &filters).unwrap();

        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn price_filter_needs_both_bounds() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones()
            .withf(|query| query.price.is_none())
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let filters = PhoneFilters {
            min_price: Some(10000.0),
            ..PhoneFilters::default()
        };

        find_with_filters(&repo, &filters).unwrap();
    }

    #[test]
    fn no_match_is_an_empty_list() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones().returning(|_| Ok(Vec::new()));

        let phones = find_by_min_rating(&repo, 5.0).expect("empty result is not an error");

        assert!(phones.is_empty());
    }

    #[test]
    fn store_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones()
            .returning(|_| Err(RepositoryError::ConnectionError("down".into())));

        let result = find_by_availability(&repo, "in-stock");

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn search_phones_parses_price_range() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones()
            .withf(|query| {
                query.price == Some((20000.0, 40000.0))
                    && query.phone_type == Some(TextMatch::Contains("Gaming".into()))
                    && query.brand.is_none()
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let params = PhoneSearchParams {
            brand: Some(String::new()),
            phone_type: Some("Gaming".into()),
            price_range: Some("20000-40000".into()),
            min_rating: None,
        };

        search_phones(&repo, params).unwrap();
    }

    #[test]
    fn search_phones_rejects_bad_price_range() {
        let mut repo = MockRepository::new();
        repo.expect_list_phones().times(0);

        let params = PhoneSearchParams {
            price_range: Some("cheap".into()),
            ..PhoneSearchParams::default()
        };

        assert!(matches!(
            search_phones(&repo, params),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn deleting_unknown_phone_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_phone()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_phone(&repo, PhoneId::new(99).unwrap());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_phone_passes_id_through() {
        let mut repo = MockRepository::new();
        repo.expect_get_phone_by_id()
            .withf(|id| id.get() == 7)
            .times(1)
            .returning(|id| Ok(Some(phone(id.get(), "Pixel 9", "Google", 4.6))));

        let found = get_phone(&repo, PhoneId::new(7).unwrap()).unwrap();

        assert_eq!(found.map(|p| p.name.into_inner()), Some("Pixel 9".to_string()));
    }
}
