pub mod about_page;
pub mod confirm_dialog;
pub mod demo_page;
pub mod history_page;
pub mod language_select;
pub mod markdown;
pub mod notice_bar;
pub mod settings_page;
pub mod sidebar;
pub mod translate_page;
