//! Product categories and the category filter.

use serde::{Deserialize, Serialize};

/// Error returned when a category slug is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// Product category.
///
/// Serialized as its kebab-case slug (`"gift-boxes"`), which is also the form
/// used in URLs and catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    GiftBoxes,
    FlowerPots,
    Sparklers,
    GroundChakkars,
    Rockets,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Sparklers,
        Self::FlowerPots,
        Self::GroundChakkars,
        Self::Rockets,
        Self::GiftBoxes,
    ];

    /// URL / wire form.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::GiftBoxes => "gift-boxes",
            Self::FlowerPots => "flower-pots",
            Self::Sparklers => "sparklers",
            Self::GroundChakkars => "ground-chakkars",
            Self::Rockets => "rockets",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GiftBoxes => "Gift Boxes",
            Self::FlowerPots => "Flower Pots",
            Self::Sparklers => "Sparklers",
            Self::GroundChakkars => "Ground Chakkars",
            Self::Rockets => "Rockets",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Which products the listing shows: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel slug selecting every category.
    pub const ALL_SLUG: &'static str = "all";

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }

    /// URL / wire form.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_SLUG,
            Self::Only(category) => category.slug(),
        }
    }

    /// Parse a filter from user input, falling back to [`CategoryFilter::All`].
    #[must_use]
    pub fn parse_or_all(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: CategoryParseError| {
            tracing::warn!(error = %e, "Unknown category filter, showing all products");
            Self::All
        })
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SLUG {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CategoryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.slug().to_string()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
