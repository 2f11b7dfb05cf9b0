pub mod constraint_validator;
#[cfg(feature = "http-transport")]
pub mod http;
pub mod in_memory;
pub mod tracing_sink;
