mod poles;
mod step_response;
mod transfer_function;

pub use poles::{polynomial_roots, PoleAnalysis};
pub use step_response::StepResponse;
pub use transfer_function::{analyze, TransferFunction};
