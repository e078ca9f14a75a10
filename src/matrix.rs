//! Combination enumerator for relation schema variants.
//!
//! Given the pair of relation fields the Parent and Child models declare,
//! [`schema_with_relation`] enumerates every structurally legal combination
//! of identity scheme, reference-directive placement, and record-addressing
//! strategy, rendering each combination into a datamodel text plus the pair
//! of selectors chosen for it. The output is partitioned into a
//! document-store family and a relational-store family; the families can
//! diverge because compound identities and compound directives are legal
//! only on relational backends.
//!
//! Generation is pure and deterministic: identical inputs always yield the
//! same ordered sequence, and no state is shared across invocations or
//! across produced variants.

use serde::Serialize;

use crate::field::RelationField;
use crate::selector::{UniqueSelector, selectors_for};
use crate::vocabulary::{
    FULL_ID_AXIS, IdentityScheme, ReferenceDirective, SIMPLE_ID_AXIS, Side,
};

/// Enumeration mode.
///
/// `Simple` is the exercised configuration. `Full` widens the identity axis
/// to compound and absent keys and the directive sets to the
/// alternate-unique and compound variants; it is structurally defined but
/// disabled by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[default]
    Simple,
    Full,
}

impl Mode {
    /// Identity options available per entity in this mode.
    pub fn identity_axis(self) -> &'static [IdentityScheme] {
        match self {
            Mode::Simple => SIMPLE_ID_AXIS,
            Mode::Full => FULL_ID_AXIS,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "full" => Ok(Mode::Full),
            other => Err(format!("unknown mode '{other}' (expected simple or full)")),
        }
    }
}

/// Backend category a variant sequence targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Family {
    Document,
    Relational,
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" => Ok(Family::Document),
            "relational" => Ok(Family::Relational),
            other => Err(format!(
                "unknown family '{other}' (expected document or relational)"
            )),
        }
    }
}

/// One generated schema variant: the datamodel text for the Parent/Child
/// pair plus the selector chosen for each side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaVariant {
    pub datamodel: String,
    pub parent: UniqueSelector,
    pub child: UniqueSelector,
}

/// Members partitioned by backend family.
///
/// Holds generated [`SchemaVariant`]s, or raw datamodel texts for the
/// hand-authored fixtures. Members are immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantBundle<T> {
    document: Vec<T>,
    relational: Vec<T>,
}

impl<T> VariantBundle<T> {
    pub fn new(document: Vec<T>, relational: Vec<T>) -> Self {
        Self {
            document,
            relational,
        }
    }

    pub fn document(&self) -> &[T] {
        &self.document
    }

    pub fn relational(&self) -> &[T] {
        &self.relational
    }

    pub fn family(&self, family: Family) -> &[T] {
        match family {
            Family::Document => &self.document,
            Family::Relational => &self.relational,
        }
    }
}

/// Legal directives for the relation field on `holder_field`'s model, which
/// points at the entity identified by `target_identity`.
///
/// Ordered decision table:
/// 1. A list field pointing at a singular field never carries the
///    reference; the singular side owns it.
/// 2. Otherwise the target's identity determines what can be referenced;
///    the simple mode restricts the result to the plain key reference.
///
/// The compound and absent identities are unreachable in simple mode
/// because its identity axis never offers them; hitting those arms is a
/// modeling bug, not a recoverable condition.
fn inbound_directives(
    mode: Mode,
    target_identity: IdentityScheme,
    holder_field: RelationField,
    target_field: RelationField,
    target: Side,
) -> Vec<ReferenceDirective> {
    if holder_field.is_list() && !target_field.is_list() {
        return vec![ReferenceDirective::None];
    }

    match (mode, target_identity) {
        (Mode::Simple, IdentityScheme::SimpleId) => vec![ReferenceDirective::SimpleRef],
        (Mode::Full, IdentityScheme::SimpleId) => vec![
            ReferenceDirective::SimpleRef,
            ReferenceDirective::AltUniqueRef(target),
            ReferenceDirective::CompoundAltRef(target),
        ],
        (Mode::Full, IdentityScheme::NoId) => vec![ReferenceDirective::AltUniqueRef(target)],
        (Mode::Full, IdentityScheme::CompoundId) => {
            vec![ReferenceDirective::CompoundRef(target)]
        }
        (Mode::Simple, IdentityScheme::NoId | IdentityScheme::CompoundId) => unreachable!(
            "identity {target_identity:?} is not on the simple axis"
        ),
    }
}

/// True when the variant is legal for document-store backends.
///
/// Compound identities and compound directives are relational-only. Every
/// simple-mode variant passes, so in simple mode both families receive the
/// same sequence unchanged.
fn document_legal(
    parent_identity: IdentityScheme,
    child_identity: IdentityScheme,
    parent_directive: ReferenceDirective,
    child_directive: ReferenceDirective,
) -> bool {
    !parent_identity.is_compound()
        && !child_identity.is_compound()
        && !parent_directive.is_compound()
        && !child_directive.is_compound()
}

fn model_block(
    side: Side,
    identity: IdentityScheme,
    field: RelationField,
    directive: ReferenceDirective,
) -> String {
    let single = side.single_key();
    let [k1, k2] = side.compound_keys();

    let mut lines = vec![
        format!("model {} {{", side.model_name()),
        format!("    {single:<12} String @unique"),
        format!("    {k1:<12} String"),
        format!("    {k2:<12} String"),
        format!("    {}{}", field.render(), directive.annotation()),
    ];
    if identity.has_id() {
        lines.push(format!("    {}", identity.fragment()));
    }
    lines.push(String::new());
    lines.push(format!("    @@unique([{k1}, {k2}])"));
    lines.push("}".to_string());
    lines.join("\n")
}

fn render_datamodel(
    parent_identity: IdentityScheme,
    child_identity: IdentityScheme,
    on_parent: RelationField,
    parent_directive: ReferenceDirective,
    on_child: RelationField,
    child_directive: ReferenceDirective,
) -> String {
    format!(
        "{}\n\n{}",
        model_block(Side::Parent, parent_identity, on_parent, parent_directive),
        model_block(Side::Child, child_identity, on_child, child_directive),
    )
}

/// Enumerate every legal schema variant for a relation.
///
/// `on_parent` is the field the Parent model declares (a `Child*` variant);
/// `on_child` is the field the Child model declares (a `Parent*` variant).
/// Passing fields that point the wrong way is a modeling bug and aborts.
pub fn schema_with_relation(
    on_parent: RelationField,
    on_child: RelationField,
    mode: Mode,
) -> VariantBundle<SchemaVariant> {
    assert!(
        on_parent.side() == Side::Child && on_child.side() == Side::Parent,
        "on_parent must point at Child and on_child at Parent, got {on_parent}/{on_child}"
    );

    let axis = mode.identity_axis();
    let mut document = Vec::new();
    let mut relational = Vec::new();

    for &parent_identity in axis {
        for &child_identity in axis {
            // Directive on the Child model's field, referencing Parent.
            for child_directive in
                inbound_directives(mode, parent_identity, on_child, on_parent, Side::Parent)
            {
                // At most one side of a relation carries a directive.
                let parent_directives = if child_directive.is_none() {
                    inbound_directives(mode, child_identity, on_parent, on_child, Side::Child)
                } else {
                    vec![ReferenceDirective::None]
                };

                for parent_directive in parent_directives {
                    for parent_selector in selectors_for(Side::Parent, parent_identity) {
                        for child_selector in selectors_for(Side::Child, child_identity) {
                            let variant = SchemaVariant {
                                datamodel: render_datamodel(
                                    parent_identity,
                                    child_identity,
                                    on_parent,
                                    parent_directive,
                                    on_child,
                                    child_directive,
                                ),
                                parent: parent_selector.clone(),
                                child: child_selector,
                            };
                            if document_legal(
                                parent_identity,
                                child_identity,
                                parent_directive,
                                child_directive,
                            ) {
                                document.push(variant.clone());
                            }
                            relational.push(variant);
                        }
                    }
                }
            }
        }
    }

    VariantBundle::new(document, relational)
}
