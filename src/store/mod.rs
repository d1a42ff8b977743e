//! Binding store for message templates and custom macros.
//!
//! Template bodies and custom macro values share one flat string-to-string
//! namespace. Backends are selected through `create_binding_store`:
//! - `memory`: process-local `DashMap`, lost on restart
//! - `redis`: persistent, keyed as `{prefix}:{key}`

mod backend;
mod factory;
mod memory_backend;
mod redis_backend;

pub use backend::{BindingStore, StoreBackend, StoreError};
pub use factory::create_binding_store;
pub use memory_backend::MemoryBindingStore;
pub use redis_backend::RedisBindingStore;
