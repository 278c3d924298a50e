pub mod data;
pub mod login;
pub mod settings;
