pub mod get;
pub mod subscribe;
