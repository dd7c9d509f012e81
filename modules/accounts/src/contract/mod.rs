//! Public contract for the accounts module

pub mod client;
pub mod error;
pub mod model;

pub use client::AccountsApi;
pub use error::AccountsError;
pub use model::{NewUser, UpdateUser, User, UserListFilter};
