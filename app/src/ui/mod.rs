pub mod login;
pub mod main;
pub mod welcome;
