//! Predicate algebra for filtering the package catalog

use crate::catalog::types::PackageListEntry;
use crate::manifest::models::{FieldQuery, ManifestSearchRequest, PackageMatchField};

/// A boolean condition over a package entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Identifier contains the keyword (case-sensitive)
    IdContains(String),
    /// Name contains the keyword (case-sensitive)
    NameContains(String),
    /// True if every sub-predicate is true; vacuously true when empty
    And(Vec<Predicate>),
    /// True if any sub-predicate is true; vacuously false when empty
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn by_id(keyword: impl Into<String>) -> Self {
        Predicate::IdContains(keyword.into())
    }

    pub fn by_name(keyword: impl Into<String>) -> Self {
        Predicate::NameContains(keyword.into())
    }

    /// Matches every entry
    pub fn all() -> Self {
        Predicate::And(Vec::new())
    }

    pub fn matches(&self, entry: &PackageListEntry) -> bool {
        match self {
            Predicate::IdContains(keyword) => entry.id.contains(keyword.as_str()),
            Predicate::NameContains(keyword) => entry.name.contains(keyword.as_str()),
            Predicate::And(predicates) => predicates.iter().all(|p| p.matches(entry)),
            Predicate::Or(predicates) => predicates.iter().any(|p| p.matches(entry)),
        }
    }

    /// Predicate for a field-scoped match; `None` for fields this source ignores
    pub fn for_field(query: &FieldQuery) -> Option<Self> {
        let keyword = &query.request_match.keyword;
        match query.package_match_field {
            PackageMatchField::PackageIdentifier | PackageMatchField::ProductCode => {
                Some(Predicate::by_id(keyword))
            }
            PackageMatchField::PackageName | PackageMatchField::PackageFamilyName => {
                Some(Predicate::by_name(keyword))
            }
            PackageMatchField::Other => None,
        }
    }
}

impl From<&ManifestSearchRequest> for Predicate {
    /// Combines keyword, inclusions (any) and filters (all) with `And`.
    ///
    /// A non-empty inclusion list contributes an `Or` even when none of its
    /// fields are searchable, in which case nothing matches.
    fn from(request: &ManifestSearchRequest) -> Self {
        let mut conditions = Vec::new();

        if !request.query.keyword.is_empty() {
            conditions.push(Predicate::by_name(&request.query.keyword));
        }

        if !request.inclusions.is_empty() {
            conditions.push(Predicate::Or(
                request
                    .inclusions
                    .iter()
                    .filter_map(Predicate::for_field)
                    .collect(),
            ));
        }

        if !request.filters.is_empty() {
            conditions.push(Predicate::And(
                request
                    .filters
                    .iter()
                    .filter_map(Predicate::for_field)
                    .collect(),
            ));
        }

        Predicate::And(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::models::Query;
    use rstest::rstest;

    fn entry(id: &str, name: &str) -> PackageListEntry {
        PackageListEntry {
            provider: "github".to_string(),
            id: id.to_string(),
            name: name.to_string(),
            installer_type: "zip-portable".to_string(),
            ..Default::default()
        }
    }

    fn field(field: PackageMatchField, keyword: &str) -> FieldQuery {
        FieldQuery {
            package_match_field: field,
            request_match: Query {
                keyword: keyword.to_string(),
            },
        }
    }

    #[test]
    fn empty_and_matches_everything() {
        assert!(Predicate::And(vec![]).matches(&entry("foo", "FooTool")));
        assert!(Predicate::all().matches(&entry("", "")));
    }

    #[test]
    fn empty_or_matches_nothing() {
        assert!(!Predicate::Or(vec![]).matches(&entry("foo", "FooTool")));
    }

    #[rstest]
    #[case(Predicate::by_id("oo"), true)]
    #[case(Predicate::by_id("Foo"), false)]
    #[case(Predicate::by_name("Foo"), true)]
    #[case(Predicate::by_name("footool"), false)]
    #[case(Predicate::And(vec![Predicate::by_id("foo"), Predicate::by_name("Tool")]), true)]
    #[case(Predicate::And(vec![Predicate::by_id("foo"), Predicate::by_name("Bar")]), false)]
    #[case(Predicate::Or(vec![Predicate::by_id("bar"), Predicate::by_name("Tool")]), true)]
    #[case(Predicate::Or(vec![Predicate::by_id("bar"), Predicate::by_name("Bar")]), false)]
    fn matches_returns_expected(#[case] predicate: Predicate, #[case] expected: bool) {
        assert_eq!(predicate.matches(&entry("foo", "FooTool")), expected);
    }

    #[rstest]
    #[case(PackageMatchField::PackageIdentifier, Some(Predicate::by_id("k")))]
    #[case(PackageMatchField::ProductCode, Some(Predicate::by_id("k")))]
    #[case(PackageMatchField::PackageName, Some(Predicate::by_name("k")))]
    #[case(PackageMatchField::PackageFamilyName, Some(Predicate::by_name("k")))]
    #[case(PackageMatchField::Other, None)]
    fn for_field_routes_by_match_field(
        #[case] match_field: PackageMatchField,
        #[case] expected: Option<Predicate>,
    ) {
        assert_eq!(Predicate::for_field(&field(match_field, "k")), expected);
    }

    #[test]
    fn search_request_without_conditions_matches_everything() {
        let predicate = Predicate::from(&ManifestSearchRequest::default());

        assert_eq!(predicate, Predicate::And(vec![]));
    }

    #[test]
    fn search_request_combines_keyword_inclusions_and_filters() {
        let request = ManifestSearchRequest {
            query: Query {
                keyword: "Tool".to_string(),
            },
            inclusions: vec![
                field(PackageMatchField::PackageIdentifier, "foo"),
                field(PackageMatchField::PackageName, "Bar"),
            ],
            filters: vec![
                field(PackageMatchField::ProductCode, "f"),
                field(PackageMatchField::Other, "ignored"),
            ],
        };

        let predicate = Predicate::from(&request);

        assert_eq!(
            predicate,
            Predicate::And(vec![
                Predicate::by_name("Tool"),
                Predicate::Or(vec![Predicate::by_id("foo"), Predicate::by_name("Bar")]),
                Predicate::And(vec![Predicate::by_id("f")]),
            ])
        );
        assert!(predicate.matches(&entry("foo", "FooTool")));
        assert!(!predicate.matches(&entry("bar", "BarTool")));
    }

    #[test]
    fn inclusions_with_only_ignored_fields_match_nothing() {
        let request = ManifestSearchRequest {
            inclusions: vec![field(PackageMatchField::Other, "foo")],
            ..Default::default()
        };

        assert!(!Predicate::from(&request).matches(&entry("foo", "FooTool")));
    }

    #[test]
    fn filters_with_only_ignored_fields_match_everything() {
        let request = ManifestSearchRequest {
            filters: vec![field(PackageMatchField::Other, "foo")],
            ..Default::default()
        };

        assert!(Predicate::from(&request).matches(&entry("bar", "BarTool")));
    }
}
