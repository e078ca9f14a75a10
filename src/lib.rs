//! Schema-variant and unique-selector generation for relation tests.
//!
//! Given the pair of relation fields the Parent and Child models declare,
//! [`schema_with_relation`] enumerates every structurally legal combination
//! of identity scheme, reference-directive placement, and record-addressing
//! strategy, partitioned into a document-store and a relational-store
//! family. The companion [`filter`] module translates JSON-shaped query
//! responses into `{field: value}` filter expressions through the selectors
//! each variant carries.

pub mod cli;
pub mod field;
pub mod filter;
pub mod fixtures;
pub mod matrix;
pub mod selector;
pub mod vocabulary;

// Re-export commonly used items
pub use field::RelationField;
pub use filter::LookupError;
pub use matrix::{Family, Mode, SchemaVariant, VariantBundle, schema_with_relation};
pub use selector::{UniqueSelector, selectors_for};
pub use vocabulary::{IdentityScheme, ReferenceDirective, Side};
