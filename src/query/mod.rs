//! Derived queries over the live catalog
//!
//! Every query walks the current back-reference lists; nothing is cached.
//! Set-like results are returned in first-encountered order and are
//! deduplicated by identity, so two authors sharing a name both appear.

mod author;
mod magazine;
