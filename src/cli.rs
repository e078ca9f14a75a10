//! CLI argument definitions.

use clap::Parser;

use crate::field::RelationField;
use crate::matrix::{Family, Mode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Relation field declared on the Parent model (ChildOpt, ChildReq, ChildList)
    #[arg(long)]
    pub on_parent: RelationField,

    /// Relation field declared on the Child model (ParentOpt, ParentReq, ParentList)
    #[arg(long)]
    pub on_child: RelationField,

    /// Enumeration mode (simple or full)
    #[arg(long, default_value = "simple")]
    pub mode: Mode,

    /// Backend family to print (document or relational)
    #[arg(long, default_value = "relational")]
    pub family: Family,
}
