pub mod library;
pub mod navigation;
pub mod palette;
