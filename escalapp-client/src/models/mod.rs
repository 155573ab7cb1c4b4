pub mod admin;
pub mod forms;
pub mod user;
