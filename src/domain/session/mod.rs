//! Chat session history

mod entity;
mod store;

pub use entity::SessionMessage;
pub use store::SessionStore;

#[cfg(test)]
pub use store::MockSessionStore;
