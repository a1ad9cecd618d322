//! Port definitions — traits that infrastructure implements.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! wiring layer can depend on them without creating circular dependencies.

pub mod id_allocator;

pub use id_allocator::RecordIdAllocator;
