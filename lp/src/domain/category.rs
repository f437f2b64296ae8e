//! Tool categories and the category filter

use serde::{Deserialize, Serialize};

/// Category a tool is filed under
///
/// `all` is deliberately absent: it only exists as a [`CategoryFilter`] value
/// and can never be stored on a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Production,
    Marketing,
    Development,
    Design,
    Analytics,
    Communication,
}

impl Category {
    /// Every storable category, in display order
    pub const ALL: [Category; 6] = [
        Self::Production,
        Self::Marketing,
        Self::Development,
        Self::Design,
        Self::Analytics,
        Self::Communication,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Marketing => "marketing",
            Self::Development => "development",
            Self::Design => "design",
            Self::Analytics => "analytics",
            Self::Communication => "communication",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Marketing => "Marketing",
            Self::Development => "Development",
            Self::Design => "Design",
            Self::Analytics => "Analytics",
            Self::Communication => "Communication",
        }
    }

    /// Glyph shown next to the label
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Production => "⚡",
            Self::Marketing => "📢",
            Self::Development => "💻",
            Self::Design => "🎨",
            Self::Analytics => "📊",
            Self::Communication => "💬",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "marketing" => Ok(Self::Marketing),
            "development" => Ok(Self::Development),
            "design" => Ok(Self::Design),
            "analytics" => Ok(Self::Analytics),
            "communication" => Ok(Self::Communication),
            "all" => Err("'all' is a filter, not a category".to_string()),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Category query value: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `all` followed by every category, in display order
    pub const ALL_FILTERS: [CategoryFilter; 7] = [
        Self::All,
        Self::Only(Category::Production),
        Self::Only(Category::Marketing),
        Self::Only(Category::Development),
        Self::Only(Category::Design),
        Self::Only(Category::Analytics),
        Self::Only(Category::Communication),
    ];

    /// Whether a tool in `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tools",
            Self::Only(category) => category.label(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::All => "🧰",
            Self::Only(category) => category.glyph(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_production() {
        assert_eq!(Category::default(), Category::Production);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("design".parse::<Category>().unwrap(), Category::Design);
        assert_eq!("ANALYTICS".parse::<Category>().unwrap(), Category::Analytics);
        assert!("all".parse::<Category>().is_err());
        assert!("nonexistent".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Communication).unwrap();
        assert_eq!(json, "\"communication\"");

        let category: Category = serde_json::from_str("\"marketing\"").unwrap();
        assert_eq!(category, Category::Marketing);

        assert!(serde_json::from_str::<Category>("\"all\"").is_err());
        assert!(serde_json::from_str::<Category>("\"nonexistent\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(" All ".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "development".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Development)
        );
        assert!("bogus".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Design));
        assert!(CategoryFilter::Only(Category::Design).matches(Category::Design));
        assert!(!CategoryFilter::Only(Category::Design).matches(Category::Marketing));
    }

    #[test]
    fn test_reference_tables() {
        assert_eq!(CategoryFilter::All.label(), "All Tools");
        assert_eq!(Category::Design.label(), "Design");
        assert_eq!(CategoryFilter::from(Category::Design).glyph(), "🎨");
        assert_eq!(CategoryFilter::ALL_FILTERS.len(), Category::ALL.len() + 1);
        assert_eq!(CategoryFilter::ALL_FILTERS[0], CategoryFilter::All);
    }
}
