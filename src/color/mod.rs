mod utils;
mod wheel;

use smart_leds::RGB8;

pub use utils::{add_colors, rgb_from_u32, scale_color};
pub use wheel::wheel;

pub type Rgb = RGB8;
