use super::{person_status::PersonStatus, role::Role};

pub fn default_status() -> PersonStatus {
    PersonStatus::Pending
}

pub fn default_role() -> Role {
    Role::Member
}
