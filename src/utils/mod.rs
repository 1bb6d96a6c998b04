pub mod error;
pub mod interactive;
pub mod logger;
pub mod output;

pub use error::*;
pub use interactive::*;
pub use output::*;
