//! HTTP API handlers for calc-web

pub mod basic;
pub mod bmi;
pub mod buildinfo;
pub mod health;
pub mod ui;

pub use basic::calculate_basic;
pub use bmi::calculate_bmi;
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};
