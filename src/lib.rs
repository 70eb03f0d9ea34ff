pub mod config;
pub mod configuration;
pub mod consts;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod keycodes;
pub mod layouts;
pub mod personalization;
pub mod steps;
pub mod store;
pub mod validator;

// cmd and reports are binary modules, declared from main.rs.
