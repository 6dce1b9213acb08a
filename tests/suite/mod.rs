//! Integration test suites

mod config;
mod render;
mod scenarios;
