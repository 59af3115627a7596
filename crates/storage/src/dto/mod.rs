pub mod admin;
pub mod auth;
pub mod metrics;
pub mod participant;
pub mod ranking;
