// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

mod sort_field;

pub use self::sort_field::*;

use std::fmt;

/// Encapsulates sort criteria for returned hits.
///
/// The first `SortField` is the primary sort key, each following one breaks
/// ties left by the fields before it. Fields are kept exactly as given: the
/// same field may appear more than once.
///
/// ### Valid Types of Values
///
/// Term values of a sort field may be Integers, Floats or Strings. Unless
/// the `SortField` names a type explicitly (`SortFieldType::Auto`), the type
/// of value in the field is determined by the search engine from the first
/// term in the field.
///
/// String values are compared either by ordinal (`SortFieldType::String`) or
/// by their natural order (`SortFieldType::StringVal`).
///
/// An empty `Sort` asks for the engine's default order.
///
/// A `Sort` is never changed after construction and may be shared freely
/// between searching threads.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize)]
pub struct Sort {
    fields: Vec<SortField>,
}

impl Sort {
    pub fn new(fields: Vec<SortField>) -> Sort {
        Sort { fields }
    }

    /// Sorts by computed relevance.
    pub fn relevance() -> Sort {
        Sort::new(vec![SortField::new_score()])
    }

    /// Sorts by index order.
    pub fn index_order() -> Sort {
        Sort::new(vec![SortField::new_doc()])
    }

    pub fn get_sort(&self) -> &[SortField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn needs_scores(&self) -> bool {
        self.fields.iter().any(|f| f.needs_scores())
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        let sort_fields: Vec<SortField> = vec![
            SortField::new(String::from("field_one"), SortFieldType::Float, true),
            SortField::new_doc(),
        ];
        let sort = Sort::new(sort_fields);

        assert!(!sort.needs_scores());
        assert_eq!(2, sort.len());

        let fields = sort.get_sort();
        let float_field = &fields[0];
        assert_eq!(float_field.field(), "field_one");
        assert_eq!(float_field.field_type(), SortFieldType::Float);

        let doc_field = &fields[1];
        assert!(doc_field.is_doc());

        assert_eq!("<float: \"field_one\">!,<doc>", sort.to_string());
    }

    #[test]
    fn test_predefined_sorts() {
        assert!(Sort::relevance().needs_scores());
        assert!(!Sort::index_order().needs_scores());
        assert_eq!("<doc>", Sort::index_order().to_string());
        assert!(Sort::default().is_empty());
        assert_eq!("", Sort::default().to_string());
    }

    #[test]
    fn test_serialize() {
        let sort = Sort::new(vec![
            SortField::new("byline".into(), SortFieldType::Int, false),
            SortField::new_doc(),
        ]);
        let json = serde_json::to_value(&sort).unwrap();
        assert_eq!(json["fields"][0]["field"], "byline");
        assert_eq!(json["fields"][0]["field_type"], "Int");
        assert_eq!(json["fields"][1]["field_type"], "Doc");
    }
}
