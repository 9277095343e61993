pub mod menu;
pub mod modals;
