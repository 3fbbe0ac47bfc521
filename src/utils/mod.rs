pub mod clock;
pub mod colors;
pub mod editor;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{money, volume};
