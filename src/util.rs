mod ranked;

pub use ranked::*;
