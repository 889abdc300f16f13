pub mod command;
pub mod observer;
pub mod strategy;
pub mod template_method;
