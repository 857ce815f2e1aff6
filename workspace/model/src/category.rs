use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour used for hotspots whose category is outside the known vocabulary.
pub const FALLBACK_HEX: &str = "#64748b";

/// Badge class paired with [`FALLBACK_HEX`].
pub const FALLBACK_BADGE: &str = "bg-slate-500";

/// Coarse natural-event classification used by the event catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Severe Storms")]
    SevereStorms,
    #[serde(rename = "Wildfires")]
    Wildfires,
    #[serde(rename = "Volcanoes")]
    Volcanoes,
    #[serde(rename = "Floods")]
    Floods,
    #[serde(rename = "Sea and Lake Ice")]
    SeaAndLakeIce,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SevereStorms,
        Category::Wildfires,
        Category::Volcanoes,
        Category::Floods,
        Category::SeaAndLakeIce,
    ];

    /// Label exactly as it appears in `primary_category` and `category_counts`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SevereStorms => "Severe Storms",
            Category::Wildfires => "Wildfires",
            Category::Volcanoes => "Volcanoes",
            Category::Floods => "Floods",
            Category::SeaAndLakeIce => "Sea and Lake Ice",
        }
    }

    /// Short token offered as a filter button; it is a substring of the label.
    pub fn filter_token(&self) -> &'static str {
        match self {
            Category::SevereStorms => "Storm",
            Category::Wildfires => "Wildfire",
            Category::Volcanoes => "Volcano",
            Category::Floods => "Flood",
            Category::SeaAndLakeIce => "Ice",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Category::SevereStorms => "#3b82f6",
            Category::Wildfires => "#ef4444",
            Category::Volcanoes => "#f97316",
            Category::Floods => "#06b6d4",
            Category::SeaAndLakeIce => "#8b5cf6",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::SevereStorms => "bg-blue-500",
            Category::Wildfires => "bg-red-500",
            Category::Volcanoes => "bg-orange-500",
            Category::Floods => "bg-cyan-500",
            Category::SeaAndLakeIce => "bg-purple-500",
        }
    }

    /// Exact lookup by label. Unknown labels are not an error; callers fall
    /// back to [`FALLBACK_HEX`].
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Colour for an arbitrary `primary_category` string.
    pub fn hex_for_label(label: &str) -> &'static str {
        Category::from_label(label).map_or(FALLBACK_HEX, |c| c.hex())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_filter_token_is_substring_of_label() {
        for category in Category::ALL {
            assert!(category.label().contains(category.filter_token()));
        }
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(Category::from_label("Landslides"), None);
        assert_eq!(Category::from_label("wildfires"), None);
        assert_eq!(Category::hex_for_label("Landslides"), FALLBACK_HEX);
        assert_eq!(Category::hex_for_label("Wildfires"), "#ef4444");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::SeaAndLakeIce).unwrap();
        assert_eq!(json, "\"Sea and Lake Ice\"");
        let parsed: Category = serde_json::from_str("\"Severe Storms\"").unwrap();
        assert_eq!(parsed, Category::SevereStorms);
    }
}
