pub mod constants;
pub mod errors;
pub mod logging;
pub mod math;
pub mod rng;

pub use constants::*;
pub use errors::*;
pub use logging::setup_logging;
pub use math::*;
pub use rng::*;
