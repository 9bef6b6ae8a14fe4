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

use std::fmt;

#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash, Serialize)]
pub enum SortFieldType {
    /// Sort by document score (relevance).
    Score,
    /// Sort by document number (index order).
    Doc,
    /// Let the search engine guess the type from the field's first term.
    Auto,
    /// Sort using term values as Strings, compared by ordinal.
    String,
    /// Sort using term values as Strings, compared by value rather than ordinal.
    StringVal,
    Int,
    Float,
}

impl SortFieldType {
    /// Resolves the type name used in sort directives (`byline:int`).
    ///
    /// Unrecognized names fall back to `Auto`.
    pub fn from_type_name(name: &str) -> SortFieldType {
        match name {
            "float" => SortFieldType::Float,
            "int" => SortFieldType::Int,
            "string" => SortFieldType::String,
            "string_val" => SortFieldType::StringVal,
            _ => SortFieldType::Auto,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            SortFieldType::Score => "score",
            SortFieldType::Doc => "doc",
            SortFieldType::Auto => "auto",
            SortFieldType::String => "string",
            SortFieldType::StringVal => "string_val",
            SortFieldType::Int => "int",
            SortFieldType::Float => "float",
        }
    }
}

/// One level of sort ordering: a field (or pseudo-field) and how its values compare.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct SortField {
    field: String,
    field_type: SortFieldType,
    is_reverse: bool,
}

impl SortField {
    pub fn new(field: String, field_type: SortFieldType, is_reverse: bool) -> SortField {
        debug_assert!(
            !field.is_empty()
                || field_type == SortFieldType::Doc
                || field_type == SortFieldType::Score
        );
        SortField {
            field,
            field_type,
            is_reverse,
        }
    }

    /// Sort by relevance, the highest score first.
    pub fn new_score() -> SortField {
        SortField {
            field: String::new(),
            field_type: SortFieldType::Score,
            is_reverse: false,
        }
    }

    /// Sort by index order.
    pub fn new_doc() -> SortField {
        SortField {
            field: String::new(),
            field_type: SortFieldType::Doc,
            is_reverse: false,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn field_type(&self) -> SortFieldType {
        self.field_type
    }

    pub fn is_reverse(&self) -> bool {
        self.is_reverse
    }

    pub fn reverse(&self) -> i32 {
        if self.is_reverse {
            -1
        } else {
            1
        }
    }

    pub fn is_doc(&self) -> bool {
        self.field_type == SortFieldType::Doc
    }

    pub fn needs_scores(&self) -> bool {
        self.field_type == SortFieldType::Score
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.field_type {
            SortFieldType::Score => write!(f, "<score>")?,
            SortFieldType::Doc => write!(f, "<doc>")?,
            SortFieldType::Auto => write!(f, "\"{}\"", self.field)?,
            t => write!(f, "<{}: \"{}\">", t.type_name(), self.field)?,
        }
        if self.is_reverse {
            write!(f, "!")?;
        }
        Ok(())
    }
}
