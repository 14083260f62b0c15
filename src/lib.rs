//! Public library API for driving an After Effects bridge and exporting compositions as scenes.

/// HTTP bridge client, wire records, and the host capability trait.
pub mod bridge;
/// Translation between live compositions and declarative scene documents.
pub mod scene;
