//! Resource filter predicate
//!
//! The UI holds the resource list in memory and re-runs this filter on every
//! keystroke or chip toggle. The filter is pure and stable: survivors keep
//! their input order.

use crate::classify::classify;
use crate::types::{Category, Resource};

/// Active filter state: free-text query, selected tag chips, and at most one
/// selected category. [`Default`] means no constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title and tags
    pub query: String,
    /// Every selected tag must be present (conjunction), case-sensitively
    pub tags: Vec<String>,
    /// Resource URL must classify to this category
    pub category: Option<Category>,
}

impl FilterCriteria {
    /// Check a single resource against all active criteria.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_query(resource) && self.matches_tags(resource) && self.matches_category(resource)
    }

    fn matches_query(&self, resource: &Resource) -> bool {
        if self.query.is_empty() {
            return true;
        }

        let query = self.query.to_lowercase();
        resource.title.to_lowercase().contains(&query)
            || resource.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
    }

    fn matches_tags(&self, resource: &Resource) -> bool {
        self.tags
            .iter()
            .all(|selected| resource.tags.iter().any(|tag| tag == selected))
    }

    fn matches_category(&self, resource: &Resource) -> bool {
        let Some(category) = self.category else {
            return true;
        };

        // An empty url counts as absent, same as the ingest form's default.
        // A resource without a url never matches an active category filter.
        match resource.url.as_deref() {
            Some(url) if !url.is_empty() => classify(url) == category,
            _ => false,
        }
    }

    /// Filter a collection, preserving input order.
    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|resource| self.matches(resource)).collect()
    }
}

/// Distinct tags across a collection, in first-seen order.
/// Feeds the tag chip row above the resource grid.
pub fn collect_tags(resources: &[Resource]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for resource in resources {
        for tag in &resource.tags {
            if !tags.iter().any(|seen| seen == tag) {
                tags.push(tag.clone());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceKind;

    fn resource(id: &str, title: &str, tags: &[&str], url: Option<&str>) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: ResourceKind::Link,
            url: url.map(|u| u.to_string()),
            preview: None,
        }
    }

    fn sample() -> Vec<Resource> {
        vec![
            resource("1", "Paper A", &["ml"], Some("x.pdf")),
            resource("2", "Talk", &["ml", "video"], Some("https://youtu.be/1")),
        ]
    }

    fn ids(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_on_empty_input() {
        let criteria = FilterCriteria::default();
        assert!(criteria.apply(&[]).is_empty());
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let resources = sample();
        assert_eq!(ids(&FilterCriteria::default().apply(&resources)), ["1", "2"]);
    }

    #[test]
    fn test_tag_conjunction() {
        let resources = sample();

        let criteria = FilterCriteria {
            tags: vec!["ml".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["1", "2"]);

        let criteria = FilterCriteria {
            tags: vec!["ml".to_string(), "video".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["2"]);
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        let resources = sample();
        let criteria = FilterCriteria {
            tags: vec!["ML".to_string()],
            ..Default::default()
        };
        assert!(criteria.apply(&resources).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let resources = sample();
        let criteria = FilterCriteria {
            category: Some(Category::Video),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["2"]);

        let criteria = FilterCriteria {
            category: Some(Category::Document),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["1"]);
    }

    #[test]
    fn test_category_filter_needs_a_url() {
        let resources = vec![
            resource("1", "No url", &[], None),
            resource("2", "Empty url", &[], Some("")),
        ];
        let criteria = FilterCriteria {
            category: Some(Category::Web),
            ..Default::default()
        };
        assert!(criteria.apply(&resources).is_empty());
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let resources = sample();
        let criteria = FilterCriteria {
            query: "talk".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["2"]);

        let criteria = FilterCriteria {
            query: "PAPER".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["1"]);
    }

    #[test]
    fn test_query_matches_tags() {
        let resources = sample();
        let criteria = FilterCriteria {
            query: "VID".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&criteria.apply(&resources)), ["2"]);
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let resources = sample();
        let criteria = FilterCriteria {
            query: "paper".to_string(),
            category: Some(Category::Video),
            ..Default::default()
        };
        assert!(criteria.apply(&resources).is_empty());
    }

    #[test]
    fn test_filter_is_stable_and_idempotent() {
        let resources = vec![
            resource("1", "Paper A", &["ml"], Some("x.pdf")),
            resource("2", "Talk", &["ml"], Some("https://youtu.be/1")),
            resource("3", "Paper B", &["ml"], Some("y.pdf")),
        ];
        let criteria = FilterCriteria {
            tags: vec!["ml".to_string()],
            ..Default::default()
        };

        let once: Vec<Resource> = criteria.apply(&resources).into_iter().cloned().collect();
        assert_eq!(ids(&once.iter().collect::<Vec<_>>()), ["1", "2", "3"]);

        let twice = criteria.apply(&once);
        assert_eq!(ids(&twice), ["1", "2", "3"]);
    }

    #[test]
    fn test_collect_tags_first_seen_order() {
        let resources = vec![
            resource("1", "A", &["rust", "ml"], None),
            resource("2", "B", &["ml", "paper"], None),
        ];
        assert_eq!(collect_tags(&resources), ["rust", "ml", "paper"]);
        assert!(collect_tags(&[]).is_empty());
    }
}
