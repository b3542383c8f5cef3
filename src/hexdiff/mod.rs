mod render;
mod view;

pub use render::{RED, RESET, compare, digit_pair_eq};
pub use view::HexView;
