pub mod audio_controls;
pub mod battle_menu;
pub mod ui;
