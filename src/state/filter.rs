//! Category + free-text filtering shared by the blog and project listings.

/// Sentinel label for the "no category restriction" chip.
pub const ALL: &str = "All";

/// Something that can be listed behind category chips and a search box.
pub trait Searchable {
    fn category(&self) -> &str;

    /// Text fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from a chip label; the `All` label maps to the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(category) => category,
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a, T> {
    Matches(Vec<&'a T>),
    NoResults,
}

#[cfg(test)]
impl<'a, T> FilterOutcome<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Self::Matches(items) => items.len(),
            Self::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing both the category and the query predicate, in their
/// original order.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    filter: &CategoryFilter,
    query: &str,
) -> FilterOutcome<'a, T> {
    let hits: Vec<&T> = records
        .iter()
        .filter(|record| filter.admits(record.category()) && matches_query(*record, query))
        .collect();

    if hits.is_empty() {
        FilterOutcome::NoResults
    } else {
        FilterOutcome::Matches(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::blog::{BLOG_CATEGORIES, BLOG_POSTS};
    use crate::content::projects::{project_categories, PROJECTS};

    #[derive(Debug, PartialEq)]
    struct Note {
        category: &'static str,
        text: &'static str,
    }

    impl Searchable for Note {
        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.text]
        }
    }

    static NOTES: [Note; 4] = [
        Note { category: "a", text: "Alpha Leadership" },
        Note { category: "b", text: "beta" },
        Note { category: "a", text: "gamma" },
        Note { category: "b", text: "LEADERSHIP delta" },
    ];

    fn texts(outcome: &FilterOutcome<'_, Note>) -> Vec<&'static str> {
        match outcome {
            FilterOutcome::Matches(items) => items.iter().map(|n| n.text).collect(),
            FilterOutcome::NoResults => Vec::new(),
        }
    }

    #[test]
    fn all_with_empty_query_keeps_everything_in_order() {
        let outcome = filter_records(&NOTES, &CategoryFilter::All, "");
        assert_eq!(texts(&outcome), vec!["Alpha Leadership", "beta", "gamma", "LEADERSHIP delta"]);
    }

    #[test]
    fn query_is_case_insensitive_and_combines_with_category() {
        let outcome = filter_records(&NOTES, &CategoryFilter::All, "leadership");
        assert_eq!(texts(&outcome), vec!["Alpha Leadership", "LEADERSHIP delta"]);

        let outcome = filter_records(&NOTES, &CategoryFilter::from_label("b"), "LeAdErShIp");
        assert_eq!(texts(&outcome), vec!["LEADERSHIP delta"]);
    }

    #[test]
    fn no_match_yields_no_results() {
        let outcome = filter_records(&NOTES, &CategoryFilter::from_label("a"), "delta");
        assert_eq!(outcome, FilterOutcome::NoResults);
        assert!(outcome.is_empty());

        let outcome = filter_records(&NOTES, &CategoryFilter::from_label("missing"), "");
        assert!(outcome.is_empty());
    }

    #[test]
    fn all_label_maps_to_sentinel() {
        assert_eq!(CategoryFilter::from_label(ALL), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Strategy").label(), "Strategy");
    }

    #[test]
    fn every_blog_category_and_query_yields_an_ordered_subsequence() {
        for label in BLOG_CATEGORIES {
            let filter = CategoryFilter::from_label(label);
            for query in ["", "leader", "TEAM", "future", "zzz"] {
                let outcome = filter_records(&BLOG_POSTS, &filter, query);
                let FilterOutcome::Matches(hits) = outcome else {
                    assert!(!BLOG_POSTS
                        .iter()
                        .any(|p| filter.admits(p.category()) && matches_query(p, query)));
                    continue;
                };

                let mut cursor = 0;
                for hit in hits {
                    assert!(filter.admits(hit.category));
                    assert!(matches_query(hit, query));
                    let position = BLOG_POSTS[cursor..]
                        .iter()
                        .position(|p| p.id == hit.id)
                        .expect("hit must come from the source list, in order");
                    cursor += position + 1;
                }
            }
        }
    }

    #[test]
    fn every_project_category_has_at_least_one_project() {
        for label in project_categories() {
            let outcome = filter_records(&PROJECTS, &CategoryFilter::from_label(label), "");
            assert!(!outcome.is_empty(), "{label} has no projects");
        }
    }
}
