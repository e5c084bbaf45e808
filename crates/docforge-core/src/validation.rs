use std::collections::BTreeSet;

use crate::error::{Result, TemplateError};
use crate::model::{FieldValues, NewTemplate};
use crate::placeholder::extract_placeholders;

/// Declared fields split by whether the caller supplied a value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldPartition {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl FieldPartition {
    /// Returns true when every declared field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Partition declared fields into present and missing, keeping declared order.
///
/// Only key absence counts as missing; an empty string is a valid value.
pub fn partition_fields(declared: &[String], supplied: &FieldValues) -> FieldPartition {
    let (present, missing): (Vec<String>, Vec<String>) = declared
        .iter()
        .cloned()
        .partition(|name| supplied.contains_key(name));
    FieldPartition { present, missing }
}

/// Declared fields without a supplied value, in declared order.
pub fn missing_fields(declared: &[String], supplied: &FieldValues) -> Vec<String> {
    partition_fields(declared, supplied).missing
}

/// Check a declared field list against the placeholders in `body`.
///
/// The comparison ignores order. Returns the canonical list, which is always
/// the body's first-occurrence order. When nothing is declared the list is
/// derived from the body.
pub fn check_declared_fields(body: &str, declared: Option<&[String]>) -> Result<Vec<String>> {
    let extracted = extract_placeholders(body);
    let Some(declared) = declared else {
        return Ok(extracted);
    };

    let mut declared_set = BTreeSet::new();
    for name in declared {
        if !declared_set.insert(name.as_str()) {
            return Err(TemplateError::DuplicateField(name.clone()));
        }
    }

    let extracted_set: BTreeSet<&str> = extracted.iter().map(String::as_str).collect();
    if declared_set != extracted_set {
        let undeclared = extracted
            .iter()
            .filter(|name| !declared_set.contains(name.as_str()))
            .cloned()
            .collect();
        let unused = declared
            .iter()
            .filter(|name| !extracted_set.contains(name.as_str()))
            .cloned()
            .collect();
        return Err(TemplateError::FieldMismatch { undeclared, unused });
    }

    Ok(extracted)
}

/// Validate a whole template definition and return its canonical field list.
pub fn check_definition(template: &NewTemplate) -> Result<Vec<String>> {
    if template.name.trim().is_empty() {
        return Err(TemplateError::EmptyName);
    }
    check_declared_fields(&template.body, template.fields.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_string_counts_as_present() {
        let declared = names(&["name", "amount"]);
        let partition = partition_fields(&declared, &values(&[("name", ""), ("amount", "0")]));
        assert!(partition.is_complete());
        assert_eq!(partition.present, declared);
    }

    #[test]
    fn missing_keeps_declared_order() {
        let declared = names(&["c", "a", "b"]);
        let missing = missing_fields(&declared, &values(&[("a", "1"), ("extra", "x")]));
        assert_eq!(missing, names(&["c", "b"]));
    }

    #[test]
    fn permuted_declaration_is_accepted_and_canonicalized() {
        let body = "{name} owes {amount}";
        let declared = names(&["amount", "name"]);
        let fields =
            check_declared_fields(body, Some(declared.as_slice())).expect("fields agree");
        assert_eq!(fields, names(&["name", "amount"]));
    }

    #[test]
    fn omitted_declaration_is_derived() {
        let fields = check_declared_fields("{b}{a}{b}", None).expect("derived");
        assert_eq!(fields, names(&["b", "a"]));
    }

    #[test]
    fn mismatch_reports_both_directions() {
        let declared = names(&["name", "date"]);
        let err = check_declared_fields("{name} owes {amount}", Some(declared.as_slice()))
            .expect_err("mismatch");
        assert_eq!(
            err,
            TemplateError::FieldMismatch {
                undeclared: names(&["amount"]),
                unused: names(&["date"]),
            }
        );
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let declared = names(&["name", "name"]);
        let err =
            check_declared_fields("{name}", Some(declared.as_slice())).expect_err("duplicate");
        assert_eq!(err, TemplateError::DuplicateField("name".to_string()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let template = NewTemplate::new("   ", "{x}");
        assert_eq!(check_definition(&template), Err(TemplateError::EmptyName));
    }
}
