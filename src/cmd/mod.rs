/// Composition create, activate and delete commands.
pub mod comp;
/// Property, expression, keyframe and effect edits.
pub mod edit;
/// Layer creation and stacking commands.
pub mod layer;
/// Read-only bridge queries.
pub mod query;
/// Scene export and apply.
pub mod scene;
/// Layer timing, CTI and work area.
pub mod timeline;
/// Shared argument helpers and JSON printing.
pub mod util;
