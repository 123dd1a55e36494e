pub mod conversations;
pub mod create;
pub mod list;
