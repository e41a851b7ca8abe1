mod setup;

pub use setup::*;
