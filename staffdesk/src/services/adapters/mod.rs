pub mod memory_adapter;

pub use memory_adapter::MemoryAdapter;
