pub mod email;
pub mod member_number;
pub mod name;
