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

use crate::core::search::sort_field::{Sort, SortField, SortFieldType};

const DOC: &str = "doc";
const NO_SCORE: &str = "noscore";
const NO_MAX_SCORE: &str = "nomaxscore";

/// A compiled sort directive: the sort itself plus the score tracking flags
/// handed to the collector.
///
/// Directives look like `field:type,field:type[,noscore][,nomaxscore]`, e.g.
/// `name,byline:int,subject:auto`:
///
/// * `doc` sorts by index order.
/// * `noscore` turns off score tracking in the collector.
/// * `nomaxscore` turns off max score tracking in the collector.
/// * anything else is a field, optionally followed by `:` and one of
///   `float`, `int`, `string` or `string_val`. The type is whatever follows the
///   last colon, and unknown types mean `auto`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortDirective {
    sort: Sort,
    track_scores: bool,
    track_max_score: bool,
}

impl SortDirective {
    pub fn parse(directive: &str) -> SortDirective {
        let mut fields = Vec::new();
        let mut track_scores = true;
        let mut track_max_score = true;

        for token in directive.split(',') {
            match token {
                "" => continue,
                DOC => fields.push(SortField::new_doc()),
                NO_SCORE => track_scores = false,
                NO_MAX_SCORE => track_max_score = false,
                _ => fields.push(Self::parse_field(token)),
            }
        }

        let sort = Sort::new(fields);
        debug!(
            "compiled sort directive '{}' into [{}], track_scores={}, track_max_score={}",
            directive, sort, track_scores, track_max_score
        );
        SortDirective {
            sort,
            track_scores,
            track_max_score,
        }
    }

    fn parse_field(token: &str) -> SortField {
        match token.rfind(':') {
            // a leading colon leaves no field name to separate a type from
            Some(idx) if idx > 0 => SortField::new(
                token[..idx].to_string(),
                SortFieldType::from_type_name(&token[idx + 1..]),
                false,
            ),
            _ => SortField::new(token.to_string(), SortFieldType::Auto, false),
        }
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn track_scores(&self) -> bool {
        self.track_scores
    }

    pub fn track_max_score(&self) -> bool {
        self.track_max_score
    }

    pub fn into_sort(self) -> Sort {
        self.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, field_type: SortFieldType) -> SortField {
        SortField::new(name.to_string(), field_type, false)
    }

    #[test]
    fn test_doc() {
        let directive = SortDirective::parse("doc");
        assert_eq!(directive.sort(), &Sort::index_order());
        assert!(directive.track_scores());
        assert!(directive.track_max_score());
    }

    #[test]
    fn test_typed_fields() {
        let directive = SortDirective::parse("name,byline:int,subject:auto");
        assert_eq!(
            directive.sort().get_sort(),
            &[
                field("name", SortFieldType::Auto),
                field("byline", SortFieldType::Int),
                field("subject", SortFieldType::Auto),
            ]
        );
        assert!(directive.track_scores());
        assert!(directive.track_max_score());
    }

    #[test]
    fn test_all_type_names() {
        let directive = SortDirective::parse("a:float,b:int,c:string,d:string_val,e:long");
        let types: Vec<SortFieldType> = directive
            .sort()
            .get_sort()
            .iter()
            .map(|f| f.field_type())
            .collect();
        assert_eq!(
            types,
            vec![
                SortFieldType::Float,
                SortFieldType::Int,
                SortFieldType::String,
                SortFieldType::StringVal,
                SortFieldType::Auto,
            ]
        );
    }

    #[test]
    fn test_noscore() {
        let directive = SortDirective::parse("price:float,noscore");
        assert_eq!(
            directive.sort().get_sort(),
            &[field("price", SortFieldType::Float)]
        );
        assert!(!directive.track_scores());
        assert!(directive.track_max_score());
    }

    #[test]
    fn test_unknown_type_and_nomaxscore() {
        let directive = SortDirective::parse("a:weird,nomaxscore,b");
        assert_eq!(
            directive.sort().get_sort(),
            &[field("a", SortFieldType::Auto), field("b", SortFieldType::Auto)]
        );
        assert!(directive.track_scores());
        assert!(!directive.track_max_score());
    }

    #[test]
    fn test_empty() {
        let directive = SortDirective::parse("");
        assert!(directive.sort().is_empty());
        assert!(directive.track_scores());
        assert!(directive.track_max_score());
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let directive = SortDirective::parse(",a,,b:int,");
        assert_eq!(
            directive.sort().get_sort(),
            &[field("a", SortFieldType::Auto), field("b", SortFieldType::Int)]
        );
    }

    #[test]
    fn test_control_tokens_do_not_affect_order() {
        let directive = SortDirective::parse("noscore,x:int,nomaxscore,doc,noscore,y,nomaxscore");
        assert_eq!(
            directive.sort().get_sort(),
            &[
                field("x", SortFieldType::Int),
                SortField::new_doc(),
                field("y", SortFieldType::Auto),
            ]
        );
        assert!(!directive.track_scores());
        assert!(!directive.track_max_score());
    }

    #[test]
    fn test_last_colon_separates_type() {
        let directive = SortDirective::parse("ns:title:string,ns:id:,a:b:c");
        assert_eq!(
            directive.sort().get_sort(),
            &[
                field("ns:title", SortFieldType::String),
                field("ns:id", SortFieldType::Auto),
                field("a:b", SortFieldType::Auto),
            ]
        );
    }

    #[test]
    fn test_leading_colon_keeps_whole_token() {
        let directive = SortDirective::parse(":int");
        assert_eq!(
            directive.sort().get_sort(),
            &[field(":int", SortFieldType::Auto)]
        );
    }

    #[test]
    fn test_repeated_fields_are_kept() {
        let directive = SortDirective::parse("name,name:string,doc,doc");
        assert_eq!(4, directive.sort().len());
        assert_eq!(
            "\"name\",<string: \"name\">,<doc>,<doc>",
            directive.sort().to_string()
        );
    }

    #[test]
    fn test_doc_is_only_matched_literally() {
        let directive = SortDirective::parse("doc:int,DOC,NoScore");
        assert_eq!(
            directive.sort().get_sort(),
            &[
                field("doc", SortFieldType::Int),
                field("DOC", SortFieldType::Auto),
                field("NoScore", SortFieldType::Auto),
            ]
        );
        assert!(directive.track_scores());
    }

    #[test]
    fn test_field_count_matches_field_tokens() {
        let input = "a,noscore,b:int,,doc,nomaxscore,c:x:float";
        let expected = input
            .split(',')
            .filter(|t| !t.is_empty() && *t != "noscore" && *t != "nomaxscore")
            .count();
        assert_eq!(expected, SortDirective::parse(input).sort().len());
    }
}
