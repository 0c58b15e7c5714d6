use nook_database::table::Table;

use crate::parser::member_type::MemberType;
use crate::parser::post::Post;
use crate::parser::profile::Profile;
use crate::parser::user::User;

/// All resource collections, guarded together by one `SafeDatabase`.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub users: Table<User>,
    pub profiles: Table<Profile>,
    pub posts: Table<Post>,
    pub member_types: Table<MemberType>,
}

impl Tables {
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for member_type in MemberType::catalog() {
            tables.member_types.insert(member_type);
        }
        tables
    }
}
