mod util;
mod types;
mod current;
mod terms;
mod vertical;
mod horizontal;

pub use types::{
    HorizontalInputs, HorizontalState, HorizontalStepDebug, VerticalInputs, VerticalState,
    VerticalStep,
};
pub use current::{current_at, value_noise2};
pub use vertical::step_vertical;
pub use horizontal::{step_horizontal, step_horizontal_dbg};
