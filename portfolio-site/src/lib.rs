pub mod access_gate;
pub mod app;
pub mod config;
pub mod credentials;
pub mod failure_marker;
pub mod logging;
pub mod pages;
pub mod route_matcher;
