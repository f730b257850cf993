mod admin;
mod movies;

pub use self::{admin::service as admin, movies::service as movies};
