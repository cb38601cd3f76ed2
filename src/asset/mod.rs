//! Asset resolution: type inference, glob expansion, public path and
//! cache-busting URL computation.

pub mod kind;
pub mod matcher;
pub mod public_path;
pub mod version;

// Types
pub use kind::{TagKind, infer_kind};
pub use matcher::{FileMatcher, GlobMatcher, ListMatcher, document_matches};
pub use public_path::{PathRewrite, PublicPathOverride, PublicPathPolicy};
pub use version::HashPolicy;
