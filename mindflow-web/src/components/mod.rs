pub mod achievements_dialog;
pub mod debug_panel;
pub mod habit_editor;
pub mod header;
pub mod modal;
pub mod nav;
pub mod repair_dialog;
pub mod revive_overlay;
pub mod settings_dialog;
pub mod toast;
