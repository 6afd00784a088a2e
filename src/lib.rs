//! Umzugsplan - Household Move Planning Backend
//!
//! This crate implements the backend for a residential move planner:
//! household management for authenticated users and the overlap
//! analyzer that detects conflicts across households' move plans.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
