mod json;
mod mem;
mod store;

pub use json::JsonStore;
pub use mem::MemStore;
pub use store::ParamStore;
