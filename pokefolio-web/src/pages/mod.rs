pub mod battle;
pub mod dynamic_view;
pub mod not_found;
