mod density;
mod drawable;
mod error;
mod generate;

pub use density::{DENSITIES, Density, SPLASH_SIZE};
pub use error::IconError;
pub use generate::generate;
