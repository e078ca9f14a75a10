//! Hand-authored datamodel fixtures.
//!
//! Fixed datamodels for tests that need a known schema rather than a
//! generated matrix. Texts are embedded at compile time with `include_str!`
//! and bundled per backend family through the same [`VariantBundle`] type
//! the enumerator produces, so harnesses iterate fixtures and generated
//! variants the same way.

use crate::matrix::VariantBundle;

/// Simple-identity pair with the reference on the child side.
///
/// Legal on both backend families.
pub const BASIC: &str = include_str!("basic.prisma");

/// Parent with a compound primary key referenced by the child.
///
/// Relational-only; compound identities are not legal on document stores.
pub const COMPOUND_ID: &str = include_str!("compound_id.prisma");

/// All hand-authored datamodels, partitioned by backend family.
pub fn datamodels() -> VariantBundle<&'static str> {
    VariantBundle::new(vec![BASIC], vec![BASIC, COMPOUND_ID])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Family;

    #[test]
    fn test_fixtures_contain_both_models() {
        for fixture in [BASIC, COMPOUND_ID] {
            assert!(fixture.contains("model Parent {"));
            assert!(fixture.contains("model Child {"));
            assert!(!fixture.trim().is_empty());
        }
    }

    #[test]
    fn test_document_family_excludes_compound_identity() {
        let bundle = datamodels();
        assert!(bundle.family(Family::Document).iter().all(|d| !d.contains("@@id")));
        assert!(bundle.family(Family::Relational).contains(&COMPOUND_ID));
    }

    #[test]
    fn test_fixtures_carry_business_key_constraints() {
        for fixture in [BASIC, COMPOUND_ID] {
            assert!(fixture.contains("@@unique([p_1, p_2])"));
            assert!(fixture.contains("@@unique([c_1, c_2])"));
        }
    }
}
