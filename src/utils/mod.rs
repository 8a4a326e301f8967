//! Versioned handles and the arena they index into.

#[macro_use]
pub mod handle;
pub mod arena;

pub mod prelude {
    pub use super::arena::Arena;
    pub use super::handle::{Handle, HandleIndex};
}
