pub mod animation;
pub mod color;
pub mod extension;
pub mod font;
pub mod keyframes;

pub use animation::{Animation, AnimationError};
pub use color::{HexColor, HexColorError};
pub use extension::{ThemeExtension, TokenCategory};
pub use font::FontStack;
pub use keyframes::{Declarations, KeyframeStop, KeyframeStopError, Keyframes};
