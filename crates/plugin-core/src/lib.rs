pub mod error;
pub mod forms;
pub mod host;
pub mod models;
pub mod traits;

pub use error::{PluginError, Result};
pub use forms::{CleanedForm, FieldError, FieldKind, FormData, FormField, FormSpec};
pub use host::{CredentialStore, OptionStore};
pub use models::*;
pub use traits::IssuePlugin;
