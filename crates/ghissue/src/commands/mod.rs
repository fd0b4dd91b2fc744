pub mod auth;
pub mod configure;
pub mod info;
pub mod issue;
