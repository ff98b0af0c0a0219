//! Banderas Bay flood-risk library
//!
//! Estimates coastal flooding risk for the beaches of Banderas Bay from
//! swell forecasts, an approximate tide curve and the phase of the moon.
//! The scoring core (`moon`, `tide`, `risk`, `forecast`) is pure; `data`,
//! `cache`, `service` and `refresh` handle fetching and caching.

pub mod cache;
pub mod cli;
pub mod data;
pub mod forecast;
pub mod moon;
pub mod refresh;
pub mod report;
pub mod risk;
pub mod service;
pub mod tide;
