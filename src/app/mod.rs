pub mod action;
pub mod apply;
pub mod capture;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod handoff;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
