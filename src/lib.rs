//! Fitlog Library
//!
//! Core nutrition accounting: user profile with a derived calorie budget,
//! a per-meal food log, and aggregate calorie/macro totals.

pub mod build_info;
pub mod catalog;
pub mod db;
pub mod engine;
pub mod models;
pub mod nutrition;
