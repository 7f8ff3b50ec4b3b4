//! Storefront domain services, persistence and upload storage.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod uploads;

#[cfg(test)]
mod test;

mod uuids;
