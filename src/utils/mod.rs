// Utils compartidos

pub mod constants;
pub mod links;

pub use constants::*;
pub use links::*;
