pub mod command_palette;
pub mod error;
pub mod helpers;

pub use command_palette::CommandPaletteModal;
pub use error::ErrorModal;
