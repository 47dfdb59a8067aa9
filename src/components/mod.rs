pub mod footer;
pub mod header;
pub mod main_view;
pub mod modals;
