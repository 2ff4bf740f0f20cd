//! Caching infrastructure with TTL and namespaces
//!
//! [`CacheStore`] is the surface the rest of the service uses. Provider
//! implementations live in `gt-providers`; port types live in `gt-domain`.

pub mod factory;
pub mod keys;
pub mod store;

pub use factory::create_cache_provider;
pub use keys::CacheKey;
pub use store::CacheStore;
