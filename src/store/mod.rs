//! # Storage Layer
//!
//! Two flat-file stores, each an explicit object constructed with an injected
//! path so callers (and tests) decide where data lives:
//!
//! - [`locations::LocationRegistry`]: ordered list of known location names,
//!   one per line, no header.
//! - [`records::RecordStore`]: CSV file of day records with header
//!   `location,date,day_type`.
//!
//! Both stores follow a whole-file load/mutate/rewrite cycle with no file
//! locking. Two processes mutating at once race on the rewrite and the last
//! writer wins; locwork is a single-user tool and accepts that.
//!
//! Validation that a record's location exists in the registry belongs to the
//! command layer. The stores stay dumb persistence.

pub mod locations;
pub mod records;

pub use locations::LocationRegistry;
pub use records::RecordStore;
