//! Unique record selectors.
//!
//! A [`UniqueSelector`] describes one way of addressing a single record of
//! an entity: which field (or compound field pair) identifies the record,
//! and how to turn a JSON response into a filter expression for it. The
//! enumerator picks one selector per side for every generated variant; the
//! filter operations run later, at test-execution time, against live
//! responses.

use serde::Serialize;
use serde_json::Value;

use crate::filter::{self, LookupError};
use crate::vocabulary::{IdentityScheme, Side};

/// One way of addressing a single record of an entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UniqueSelector {
    label: String,
    arg: String,
    fields: Vec<String>,
}

impl UniqueSelector {
    /// Selector over a single field; the field name doubles as the filter key.
    pub fn single_field(field: &str) -> Self {
        Self {
            label: field.to_string(),
            arg: field.to_string(),
            fields: vec![field.to_string()],
        }
    }

    /// Selector over a compound field pair.
    ///
    /// The label is the comma-joined selection form; the filter key joins
    /// the fields with underscores.
    pub fn compound(fields: [&str; 2]) -> Self {
        Self {
            label: fields.join(","),
            arg: fields.join("_"),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Comma-joined display/selection label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Key used in rendered filter expressions.
    pub fn arg(&self) -> &str {
        &self.arg
    }

    /// Underlying identifier field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// True for compound-pair selectors.
    pub fn is_compound(&self) -> bool {
        self.fields.len() > 1
    }

    /// Build a filter for the one record at `path`.
    pub fn single(&self, json: &Value, path: &[&str]) -> Result<String, LookupError> {
        let record = filter::value_at(json, path)?;
        self.filter_for_record(record, path)
    }

    /// Build a filter for the first element of the list at `path`.
    ///
    /// Later elements are ignored; an empty list is a lookup failure.
    pub fn first_of_list(&self, json: &Value, path: &[&str]) -> Result<String, LookupError> {
        let list = filter::list_at(json, path)?;
        let first = list.first().ok_or_else(|| LookupError::MissingPath {
            path: format!("{}[0]", path.join(".")),
        })?;
        self.filter_for_record(first, path)
    }

    /// Build a filter array for the whole list of records at `path`.
    ///
    /// Single-field selectors pass the list through as a literal array;
    /// compound selectors wrap each element into its own filter object.
    pub fn bulk(&self, json: &Value, path: &[&str]) -> Result<String, LookupError> {
        let list = filter::list_at(json, path)?;
        if self.is_compound() {
            let parts: Vec<String> = list
                .iter()
                .map(|element| format!("{{{}: {}}}", self.arg, filter::render(element)))
                .collect();
            Ok(format!("[{}]", parts.join(", ")))
        } else {
            Ok(filter::render(&Value::Array(list.clone())))
        }
    }

    fn filter_for_record(&self, record: &Value, path: &[&str]) -> Result<String, LookupError> {
        if self.is_compound() {
            let mut pair = serde_json::Map::new();
            for field in &self.fields {
                let value = filter::scalar_field(record, field, path)?;
                pair.insert(field.clone(), value.clone());
            }
            Ok(format!(
                "{{{}: {}}}",
                self.arg,
                filter::render(&Value::Object(pair))
            ))
        } else {
            let value = filter::scalar_field(record, &self.fields[0], path)?;
            Ok(format!("{{{}: {}}}", self.arg, filter::render(value)))
        }
    }
}

/// Addressing strategies available for one side of a relation.
///
/// The identity-based selector comes first when the scheme declares a key;
/// the two business-key selectors are always available regardless of
/// identity.
pub fn selectors_for(side: Side, identity: IdentityScheme) -> Vec<UniqueSelector> {
    let mut selectors = Vec::with_capacity(3);
    match identity {
        IdentityScheme::SimpleId => selectors.push(UniqueSelector::single_field("id")),
        IdentityScheme::CompoundId => selectors.push(UniqueSelector::compound(["id_1", "id_2"])),
        IdentityScheme::NoId => {}
    }
    selectors.push(UniqueSelector::single_field(side.single_key()));
    selectors.push(UniqueSelector::compound(side.compound_keys()));
    selectors
}
