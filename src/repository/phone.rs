//! Repository implementation for catalog phones.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::unicode_lower,
    domain::{
        phone::{NewPhone, Phone, UpdatePhone},
        types::PhoneId,
    },
    models::phone::{
        NewPhone as DbNewPhone, Phone as DbPhone, UpdatePhone as DbUpdatePhone,
    },
    repository::{
        DieselRepository, PhoneListQuery, PhoneReader, PhoneWriter, TextMatch,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Builds a `LIKE` pattern matching `fragment` anywhere, with `\` escaping
/// the wildcard characters it contains.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn into_domain(rows: Vec<DbPhone>) -> RepositoryResult<Vec<Phone>> {
    rows.into_iter()
        .map(|row| Phone::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl PhoneReader for DieselRepository {
    fn get_phone_by_id(&self, id: PhoneId) -> RepositoryResult<Option<Phone>> {
        use crate::schema::phones;

        let mut conn = self.conn()?;
        let db_phone = phones::table
            .find(id.get())
            .first::<DbPhone>(&mut conn)
            .optional()?;

        match db_phone {
            Some(db_phone) => Ok(Some(
                Phone::try_from(db_phone).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_phones(&self, query: PhoneListQuery) -> RepositoryResult<Vec<Phone>> {
        use crate::schema::phones;

        log::debug!("Listing phones with {query:?}");

        let PhoneListQuery {
            brand,
            phone_type,
            name,
            price,
            min_rating,
            availability,
        } = query;

        let mut conn = self.conn()?;
        let mut items = phones::table.into_boxed::<Sqlite>();

        if let Some(brand) = brand {
            items = match brand {
                TextMatch::Equals(value) => {
                    items.filter(unicode_lower(phones::brand).eq(value.to_lowercase()))
                }
                TextMatch::Contains(value) => items.filter(
                    unicode_lower(phones::brand)
                        .like(contains_pattern(&value))
                        .escape('\\'),
                ),
            };
        }

        if let Some(phone_type) = phone_type {
            items = match phone_type {
                TextMatch::Equals(value) => {
                    items.filter(unicode_lower(phones::phone_type).eq(value.to_lowercase()))
                }
                TextMatch::Contains(value) => items.filter(
                    unicode_lower(phones::phone_type)
                        .like(contains_pattern(&value))
                        .escape('\\'),
                ),
            };
        }

        if let Some(name) = name {
            items = match name {
                TextMatch::Equals(value) => {
                    items.filter(unicode_lower(phones::name).eq(value.to_lowercase()))
                }
                TextMatch::Contains(value) => items.filter(
                    unicode_lower(phones::name)
                        .like(contains_pattern(&value))
                        .escape('\\'),
                ),
            };
        }

        if let Some((min, max)) = price {
            items = items.filter(phones::price.between(min, max));
        }

        if let Some(rating) = min_rating {
            items = items.filter(phones::rating.ge(rating));
        }

        if let Some(status) = availability {
            items = items.filter(phones::availability.eq(status));
        }

        let rows = items
            .order(phones::id.asc())
            .load::<DbPhone>(&mut conn)?;

        into_domain(rows)
    }
}

impl PhoneWriter for DieselRepository {
    fn create_phones(&self, new_phones: &[NewPhone]) -> RepositoryResult<usize> {
        use crate::schema::phones;

        if new_phones.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewPhone> = new_phones.iter().map(Into::into).collect();
        let affected = diesel::insert_into(phones::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_phone(&self, phone_id: PhoneId, updates: &UpdatePhone) -> RepositoryResult<Phone> {
        use crate::schema::phones;

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePhone = updates.into();

        let updated = diesel::update(phones::table.find(phone_id.get()))
            .set(&db_updates)
            .get_result::<DbPhone>(&mut conn)?;

        Phone::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_phone(&self, phone_id: PhoneId) -> RepositoryResult<()> {
        use crate::schema::phones;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(phones::table.find(phone_id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_and_lowercases() {
        assert_eq!(contains_pattern("Galaxy"), "%galaxy%");
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn empty_fragment_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }
}
