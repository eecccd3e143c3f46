// Identity and sessions. Both are trait objects in AppState so the
// in-memory stores can be swapped without touching handlers.

pub mod extractor;
pub mod handlers;
pub mod identity;
pub mod sessions;
