pub mod context;
pub mod wire;
