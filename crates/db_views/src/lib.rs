pub mod community_view;
pub mod conversation_view;
pub mod post_view;
pub mod structs;
pub mod talent_view;
pub mod user_view;
