pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
