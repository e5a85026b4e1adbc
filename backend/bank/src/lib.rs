pub mod payloads;
pub mod users;

pub const USERS_KEY: &str = "users";

pub const OPERATION_CODE: u8 = 1;
