//! Shared model and form logic for the churn predictor.
//!
//! Everything here is plain Rust so that the Yew frontend and the actix
//! backend agree on the wire format, and so the form contract can be tested
//! without a browser.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod requests;
