pub use self::{board::*, cell::*};

pub(crate) mod board;
pub(crate) mod cell;
