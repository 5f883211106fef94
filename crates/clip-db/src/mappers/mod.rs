//! Entity <-> model mappers

mod audit;
mod ban;
mod campaign;
mod common;
mod payout;
mod profile;
mod submission;
mod tracking;
mod user;
