//! Bill store REST client.

mod client;
mod dto;

pub use client::HttpBillStore;
