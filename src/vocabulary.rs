//! Identity and reference vocabulary for schema generation.
//!
//! Pure data: the identity schemes a model can declare, the reference
//! directives a relation field can carry, and the rendered schema-fragment
//! text for each. The enumerator and selector catalog consume these values;
//! nothing here performs any computation beyond lookup.

use serde::Serialize;

/// The two entities of a generated relation.
///
/// Also names the target of a reference directive and selects the
/// business-key field names (`p`/`p_1`/`p_2` on the parent, `c`/`c_1`/`c_2`
/// on the child).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    Parent,
    Child,
}

impl Side {
    /// Model name used in rendered schema blocks.
    pub fn model_name(self) -> &'static str {
        match self {
            Side::Parent => "Parent",
            Side::Child => "Child",
        }
    }

    /// Single business-key field for this side.
    pub fn single_key(self) -> &'static str {
        match self {
            Side::Parent => "p",
            Side::Child => "c",
        }
    }

    /// Compound business-key field pair for this side.
    pub fn compound_keys(self) -> [&'static str; 2] {
        match self {
            Side::Parent => ["p_1", "p_2"],
            Side::Child => ["c_1", "c_2"],
        }
    }
}

/// Primary-key strategy of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IdentityScheme {
    /// Single `id` field declared as the primary key.
    SimpleId,
    /// Two-part key (`id_1`, `id_2`) with a combined `@@id` constraint.
    CompoundId,
    /// No primary key; records are addressed through business keys only.
    NoId,
}

impl IdentityScheme {
    /// Schema fragment declaring the model's primary key.
    ///
    /// Empty for [`IdentityScheme::NoId`]; callers must not emit a blank
    /// line for it.
    pub fn fragment(self) -> &'static str {
        match self {
            IdentityScheme::SimpleId => "id           String @id @default(cuid())",
            IdentityScheme::CompoundId => {
                "id_1         String @default(cuid())\n    \
                 id_2         String @default(cuid())\n\n    \
                 @@id([id_1, id_2])"
            }
            IdentityScheme::NoId => "",
        }
    }

    /// True when the scheme declares any primary key at all.
    pub fn has_id(self) -> bool {
        !matches!(self, IdentityScheme::NoId)
    }

    /// True for the two-part key scheme, which is relational-only.
    pub fn is_compound(self) -> bool {
        matches!(self, IdentityScheme::CompoundId)
    }
}

/// Identity axis for the restricted (default) enumeration mode.
pub const SIMPLE_ID_AXIS: &[IdentityScheme] = &[IdentityScheme::SimpleId];

/// Identity axis for the full enumeration mode.
pub const FULL_ID_AXIS: &[IdentityScheme] = &[
    IdentityScheme::SimpleId,
    IdentityScheme::CompoundId,
    IdentityScheme::NoId,
];

/// Annotation placed on a relation field indicating which side owns the
/// reference mapping.
///
/// The carried [`Side`] names the referenced entity, which determines the
/// referenced column names for the alternate-unique and compound variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReferenceDirective {
    /// No annotation; the other side owns the reference.
    None,
    /// References the target's simple `id` key.
    SimpleRef,
    /// References the target's compound `id_1`/`id_2` key.
    CompoundRef(Side),
    /// References the target's single business key (`p` or `c`).
    AltUniqueRef(Side),
    /// References the target's compound business-key pair.
    CompoundAltRef(Side),
}

impl ReferenceDirective {
    /// Annotation text appended to the relation field line.
    ///
    /// Includes its leading space; empty for [`ReferenceDirective::None`].
    pub fn annotation(self) -> String {
        match self {
            ReferenceDirective::None => String::new(),
            ReferenceDirective::SimpleRef => " @relation(references: [id])".to_string(),
            ReferenceDirective::CompoundRef(_) => {
                " @relation(references: [id_1, id_2])".to_string()
            }
            ReferenceDirective::AltUniqueRef(target) => {
                format!(" @relation(references: [{}])", target.single_key())
            }
            ReferenceDirective::CompoundAltRef(target) => {
                let [k1, k2] = target.compound_keys();
                format!(" @relation(references: [{k1}, {k2}])")
            }
        }
    }

    /// True when the field carries no annotation.
    pub fn is_none(self) -> bool {
        matches!(self, ReferenceDirective::None)
    }

    /// True for directives that reference a two-column key.
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            ReferenceDirective::CompoundRef(_) | ReferenceDirective::CompoundAltRef(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fragments_declare_expected_keys() {
        assert!(IdentityScheme::SimpleId.fragment().contains("@id"));
        assert!(IdentityScheme::CompoundId.fragment().contains("@@id([id_1, id_2])"));
        assert!(IdentityScheme::NoId.fragment().is_empty());
    }

    #[test]
    fn test_axes_are_consistent() {
        assert_eq!(SIMPLE_ID_AXIS, &[IdentityScheme::SimpleId]);
        assert_eq!(FULL_ID_AXIS.len(), 3);
        for identity in SIMPLE_ID_AXIS {
            assert!(FULL_ID_AXIS.contains(identity), "simple axis must be a subset");
        }
    }

    #[test]
    fn test_directive_annotations_reference_target_keys() {
        assert_eq!(ReferenceDirective::None.annotation(), "");
        assert_eq!(
            ReferenceDirective::SimpleRef.annotation(),
            " @relation(references: [id])"
        );
        assert_eq!(
            ReferenceDirective::AltUniqueRef(Side::Parent).annotation(),
            " @relation(references: [p])"
        );
        assert_eq!(
            ReferenceDirective::AltUniqueRef(Side::Child).annotation(),
            " @relation(references: [c])"
        );
        assert_eq!(
            ReferenceDirective::CompoundAltRef(Side::Parent).annotation(),
            " @relation(references: [p_1, p_2])"
        );
        assert_eq!(
            ReferenceDirective::CompoundRef(Side::Child).annotation(),
            " @relation(references: [id_1, id_2])"
        );
    }

    #[test]
    fn test_compound_classification() {
        assert!(IdentityScheme::CompoundId.is_compound());
        assert!(!IdentityScheme::SimpleId.is_compound());
        assert!(ReferenceDirective::CompoundRef(Side::Parent).is_compound());
        assert!(ReferenceDirective::CompoundAltRef(Side::Child).is_compound());
        assert!(!ReferenceDirective::SimpleRef.is_compound());
        assert!(!ReferenceDirective::None.is_compound());
    }
}
