//! PhysicsBody - the resolver's only mutation target
//!
//! Holds nothing but geometry, velocity and the persisted ground flag.
//! Game-specific state (AI, cooldowns) lives in components owned by the caller.

mod body;

pub use body::PhysicsBody;
