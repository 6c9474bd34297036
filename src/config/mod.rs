//! Config layer: JSON documents + validated in-memory structures.
//!
//! Both input files share one envelope (an optional `variables` table plus
//! strippable `comment` keys) and differ only in their payload values:
//! - mixture config: dataset name -> relative sampling weight (number)
//! - path mapping: dataset name -> storage location (string)

pub mod document;
pub mod mix;
pub mod paths;
pub mod preprocess;

pub use document::parse_document;
pub use mix::{MixEntry, MixSpec};
pub use paths::PathMap;
