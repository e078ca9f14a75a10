//! Relation field descriptors.
//!
//! A relation is described by the pair of fields the two models declare for
//! it: the Parent model declares one of the `Child*` variants, the Child
//! model one of the `Parent*` variants. The pair fully determines the
//! relation cardinality: both singular is one-to-one, one list is
//! one-to-many, both lists is many-to-many.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::vocabulary::Side;

/// Closed set of relation fields a model can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RelationField {
    /// `Parent[]` list field on the Child model.
    ParentList,
    /// `Child[]` list field on the Parent model.
    ChildList,
    /// Optional singular `Parent?` field on the Child model.
    ParentOpt,
    /// Required singular `Parent` field on the Child model.
    ParentReq,
    /// Optional singular `Child?` field on the Parent model.
    ChildOpt,
    /// Required singular `Child` field on the Parent model.
    ChildReq,
}

impl RelationField {
    /// Rendered field line, without any directive annotation.
    pub fn render(self) -> &'static str {
        match self {
            RelationField::ParentList => "parentsOpt   Parent[]",
            RelationField::ChildList => "childrenOpt  Child[]",
            RelationField::ParentOpt => "parentOpt    Parent?",
            RelationField::ParentReq => "parentReq    Parent",
            RelationField::ChildOpt => "childOpt     Child?",
            RelationField::ChildReq => "childReq     Child",
        }
    }

    /// True for list-arity fields.
    pub fn is_list(self) -> bool {
        matches!(self, RelationField::ParentList | RelationField::ChildList)
    }

    /// True for required singular fields.
    pub fn is_required(self) -> bool {
        matches!(self, RelationField::ParentReq | RelationField::ChildReq)
    }

    /// The entity this field points at.
    pub fn side(self) -> Side {
        match self {
            RelationField::ParentList | RelationField::ParentOpt | RelationField::ParentReq => {
                Side::Parent
            }
            RelationField::ChildList | RelationField::ChildOpt | RelationField::ChildReq => {
                Side::Child
            }
        }
    }
}

impl fmt::Display for RelationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationField::ParentList => "ParentList",
            RelationField::ChildList => "ChildList",
            RelationField::ParentOpt => "ParentOpt",
            RelationField::ParentReq => "ParentReq",
            RelationField::ChildOpt => "ChildOpt",
            RelationField::ChildReq => "ChildReq",
        };
        f.write_str(name)
    }
}

impl FromStr for RelationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parentlist" => Ok(RelationField::ParentList),
            "childlist" => Ok(RelationField::ChildList),
            "parentopt" => Ok(RelationField::ParentOpt),
            "parentreq" => Ok(RelationField::ParentReq),
            "childopt" => Ok(RelationField::ChildOpt),
            "childreq" => Ok(RelationField::ChildReq),
            other => Err(format!(
                "unknown relation field '{other}' (expected one of ParentList, ChildList, \
                 ParentOpt, ParentReq, ChildOpt, ChildReq)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RelationField::ParentList, true)]
    #[case(RelationField::ChildList, true)]
    #[case(RelationField::ParentOpt, false)]
    #[case(RelationField::ParentReq, false)]
    #[case(RelationField::ChildOpt, false)]
    #[case(RelationField::ChildReq, false)]
    fn test_is_list(#[case] field: RelationField, #[case] expected: bool) {
        assert_eq!(field.is_list(), expected);
    }

    #[rstest]
    #[case(RelationField::ParentReq, true)]
    #[case(RelationField::ChildReq, true)]
    #[case(RelationField::ParentOpt, false)]
    #[case(RelationField::ChildList, false)]
    fn test_is_required(#[case] field: RelationField, #[case] expected: bool) {
        assert_eq!(field.is_required(), expected);
    }

    #[test]
    fn test_side_matches_pointed_entity() {
        assert_eq!(RelationField::ParentOpt.side(), Side::Parent);
        assert_eq!(RelationField::ParentList.side(), Side::Parent);
        assert_eq!(RelationField::ChildReq.side(), Side::Child);
        assert_eq!(RelationField::ChildList.side(), Side::Child);
    }

    #[test]
    fn test_render_declares_pointed_model() {
        assert!(RelationField::ParentOpt.render().contains("Parent?"));
        assert!(RelationField::ParentReq.render().ends_with("Parent"));
        assert!(RelationField::ChildList.render().contains("Child[]"));
    }

    #[rstest]
    #[case("ParentList", RelationField::ParentList)]
    #[case("childreq", RelationField::ChildReq)]
    #[case("ParentOpt", RelationField::ParentOpt)]
    fn test_from_str_round_trip(#[case] input: &str, #[case] expected: RelationField) {
        assert_eq!(input.parse::<RelationField>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<RelationField>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Sibling".parse::<RelationField>().is_err());
    }
}
