pub use super::seen_link::Entity as SeenLink;
pub use super::temp_ban::Entity as TempBan;
pub use super::user::Entity as User;
