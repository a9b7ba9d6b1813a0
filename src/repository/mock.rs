//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::phone::{NewPhone, Phone, UpdatePhone};
use crate::domain::types::PhoneId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{PhoneListQuery, PhoneReader, PhoneWriter};

mock! {
    pub Repository {}

    impl PhoneReader for Repository {
        fn get_phone_by_id(&self, id: PhoneId) -> RepositoryResult<Option<Phone>>;
        fn list_phones(&self, query: PhoneListQuery) -> RepositoryResult<Vec<Phone>>;
    }

    impl PhoneWriter for Repository {
        fn create_phones(&self, new_phones: &[NewPhone]) -> RepositoryResult<usize>;
        fn update_phone(&self, phone_id: PhoneId, updates: &UpdatePhone) -> RepositoryResult<Phone>;
        fn delete_phone(&self, phone_id: PhoneId) -> RepositoryResult<()>;
    }
}
