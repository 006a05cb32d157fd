pub mod header;
pub mod home;
pub mod news;
pub mod placeholder;
