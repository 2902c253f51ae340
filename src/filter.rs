use crate::content::Project;

pub const ALL: &str = "all";

/// Categories offered as filter buttons, wildcard first.
pub const CATEGORIES: [&str; 5] = [ALL, "web", "mobile", "design", "blockchain"];

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    pub fn parse(category: &str) -> Self {
        if category == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Category(category.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(category) => project.category == category.as_str(),
        }
    }
}

/// Current project category selection.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoryFilter {
    selection: FilterSelection,
}

impl CategoryFilter {
    pub fn select(&mut self, category: &str) {
        self.selection = FilterSelection::parse(category);
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.selection.as_str() == category
    }

    /// Projects matching the selection, in their original order.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.selection.matches(p)).collect()
    }
}

/// "web" -> "Web"
pub fn label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: &'static str) -> Project {
        Project {
            id,
            category,
            ..crate::content::PROJECTS[0].clone()
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "web"),
            project(2, "mobile"),
            project(3, "web"),
            project(4, "blockchain"),
        ]
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let projects = sample();
        let mut filter = CategoryFilter::default();
        filter.select("web");
        filter.select("all");
        assert_eq!(filter.selection(), &FilterSelection::All);
        assert_eq!(ids(&filter.visible(&projects)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let projects = sample();
        let mut filter = CategoryFilter::default();
        filter.select("web");
        assert_eq!(ids(&filter.visible(&projects)), vec![1, 3]);
        filter.select("blockchain");
        assert_eq!(ids(&filter.visible(&projects)), vec![4]);
    }

    #[test]
    fn test_empty_and_unknown_categories() {
        let projects = sample();
        let mut filter = CategoryFilter::default();
        filter.select("design");
        assert!(filter.visible(&projects).is_empty());
        filter.select("games");
        assert!(filter.visible(&projects).is_empty());
    }

    #[test]
    fn test_active_button() {
        let mut filter = CategoryFilter::default();
        assert!(filter.is_active("all"));
        filter.select("mobile");
        assert!(filter.is_active("mobile"));
        assert!(!filter.is_active("all"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(label("blockchain"), "Blockchain");
        assert_eq!(label(""), "");
    }
}
