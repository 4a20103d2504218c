//! FAQ browsing
//!
//! Cyclic cursor over FAQ item lists for per-session browsing.

pub mod cursor;

pub use cursor::FaqCursor;
