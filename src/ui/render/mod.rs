mod all;
mod footer;
mod log;
mod picker;
mod theme_selector;
mod value_label;

use self::log::log;
use super::Frame;
use crate::state::State;
use footer::footer;
use picker::picker;
use theme_selector::theme_selector;
use value_label::value_label;

pub use all::all as render;
pub use picker::wheel_areas;
