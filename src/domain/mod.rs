pub mod amount;
pub mod catalog;
pub mod constraints;
pub mod event;
pub mod mapping;
pub mod message;
pub mod ports;
pub mod signature;
