pub mod commands;
pub mod contracts;
pub mod error;
mod input;
pub mod rewards;

pub use contracts::envelope::{ErrorContract, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
