//! Controller decorators

mod log_controller;

pub use log_controller::LogControllerDecorator;
