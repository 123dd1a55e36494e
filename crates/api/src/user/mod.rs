pub mod login;
pub mod password_change;
pub mod password_reset;
pub mod save_settings;
