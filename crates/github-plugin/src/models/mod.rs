pub mod comment;
pub mod error;
pub mod issue;

pub use comment::*;
pub use error::*;
pub use issue::*;
