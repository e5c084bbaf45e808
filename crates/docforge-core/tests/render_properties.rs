use std::collections::HashSet;

use docforge_core::{FieldValues, RenderError, extract_placeholders, render};
use proptest::prelude::*;

fn literal_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:;-]{0,12}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,10}"
}

/// Names in body order (with repeats) and one literal chunk per gap.
fn body_parts_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::vec(name_strategy(), 0..8).prop_flat_map(|names| {
        let gaps = names.len() + 1;
        (
            Just(names),
            prop::collection::vec(literal_strategy(), gaps..=gaps),
        )
    })
}

fn assemble(names: &[String], literals: &[String]) -> String {
    let mut body = String::new();
    for (idx, literal) in literals.iter().enumerate() {
        body.push_str(literal);
        if let Some(name) = names.get(idx) {
            body.push('{');
            body.push_str(name);
            body.push('}');
        }
    }
    body
}

fn distinct(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn extraction_ignores_surrounding_text((names, literals) in body_parts_strategy()) {
        let mut shuffled = literals.clone();
        shuffled.reverse();

        let original = extract_placeholders(&assemble(&names, &literals));
        let reordered = extract_placeholders(&assemble(&names, &shuffled));

        prop_assert_eq!(&original, &reordered);
        prop_assert_eq!(original, distinct(&names));
    }

    #[test]
    fn complete_values_leave_no_placeholders(
        (names, literals) in body_parts_strategy(),
        value in value_strategy()
    ) {
        let body = assemble(&names, &literals);
        let declared = extract_placeholders(&body);
        let supplied: FieldValues = declared
            .iter()
            .map(|name| (name.clone(), format!("{value}{}", name.len())))
            .collect();

        let output = render(&body, &declared, &supplied).expect("complete values render");
        for name in &declared {
            let token = format!("{{{name}}}");
            prop_assert!(!output.contains(&token));
        }

        let again = render(&body, &declared, &supplied).expect("second render");
        prop_assert_eq!(output, again);
    }

    #[test]
    fn missing_list_equals_declared_minus_supplied(
        (names, literals) in body_parts_strategy(),
        mask in prop::collection::vec(any::<bool>(), 8)
    ) {
        let body = assemble(&names, &literals);
        let declared = extract_placeholders(&body);
        let supplied: FieldValues = declared
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| (name.clone(), String::new()))
            .collect();
        let expected: Vec<String> = declared
            .iter()
            .filter(|name| !supplied.contains_key(*name))
            .cloned()
            .collect();

        match render(&body, &declared, &supplied) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(RenderError::MissingFields(missing)) => prop_assert_eq!(missing, expected),
        }
    }
}
