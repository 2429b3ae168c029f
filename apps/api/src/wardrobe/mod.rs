// Saved-outfit wardrobe: a best-effort bookmark list behind an injected store.

pub mod handlers;
pub mod result_view;
pub mod saved;
pub mod store;
