//! Groups contact records that refer to the same person.
//!
//! Two contacts belong together when they share an identifying string (a
//! name, email, phone number, ...), directly or through a chain of other
//! contacts. Matching is exact string equality.

pub mod assignment;
pub mod contact;
pub mod error;
mod grouper;
mod index;
mod merge;
pub mod text;

pub use contact::{ContactGroups, ContactIndex, GroupId};
pub use error::{GroupingError, Result};
pub use grouper::{ContactGrouper, ContactGrouperBuilder, GrouperConfig, MemberOrder};
pub use index::IdentifierIndex;
pub use merge::MergedContact;
