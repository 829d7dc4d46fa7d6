pub mod login;
pub mod placeholder;
pub mod settings;
pub mod users;
