use common::CategoryMatching;
use model::Hotspot;
use std::fmt;
use tracing::trace;

/// Category chosen in the map toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// The `"all"` sentinel: nothing is filtered out.
    #[default]
    All,
    /// Keep hotspots whose `primary_category` contains this token.
    Only(String),
}

impl CategorySelection {
    pub const ALL_TOKEN: &'static str = "all";

    /// `"all"` selects everything, anything else is a category token.
    pub fn parse(token: &str) -> Self {
        if token == Self::ALL_TOKEN {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::All => Self::ALL_TOKEN,
            Self::Only(token) => token,
        }
    }

    /// Whether a hotspot with this category label passes the selection.
    pub fn matches(&self, primary_category: &str, matching: CategoryMatching) -> bool {
        match self {
            Self::All => true,
            Self::Only(token) => match matching {
                CategoryMatching::CaseSensitive => primary_category.contains(token.as_str()),
                CategoryMatching::CaseInsensitive => primary_category
                    .to_lowercase()
                    .contains(&token.to_lowercase()),
            },
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Subsequence of `hotspots` passing `selection`, in input order.
pub fn filter_hotspots<'a>(
    hotspots: &'a [Hotspot],
    selection: &CategorySelection,
    matching: CategoryMatching,
) -> Vec<&'a Hotspot> {
    let filtered: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|h| selection.matches(&h.primary_category, matching))
        .collect();

    trace!(
        selection = %selection,
        kept = filtered.len(),
        total = hotspots.len(),
        "Filtered hotspots"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotspot(title: &str, category: &str, count: u64) -> Hotspot {
        Hotspot {
            title: title.to_string(),
            primary_category: category.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            count,
        }
    }

    fn sample() -> Vec<Hotspot> {
        vec![
            hotspot("a", "Severe Storms", 100),
            hotspot("b", "Wildfires", 400),
            hotspot("c", "Severe Storms", 25),
            hotspot("d", "Sea and Lake Ice", 9),
        ]
    }

    #[test]
    fn test_parse() {
        assert_eq!(CategorySelection::parse("all"), CategorySelection::All);
        assert_eq!(
            CategorySelection::parse("Storm"),
            CategorySelection::Only("Storm".to_string())
        );
        assert_eq!(CategorySelection::parse("Storm").token(), "Storm");
        assert_eq!(CategorySelection::All.to_string(), "all");
    }

    #[test]
    fn test_all_is_order_preserving_identity() {
        let hotspots = sample();
        let filtered =
            filter_hotspots(&hotspots, &CategorySelection::All, CategoryMatching::CaseSensitive);
        let expected: Vec<&Hotspot> = hotspots.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_substring_match_keeps_order() {
        let hotspots = sample();
        let filtered = filter_hotspots(
            &hotspots,
            &CategorySelection::parse("Storm"),
            CategoryMatching::CaseSensitive,
        );
        let titles: Vec<&str> = filtered.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);

        let ice = filter_hotspots(
            &hotspots,
            &CategorySelection::parse("Ice"),
            CategoryMatching::CaseSensitive,
        );
        assert_eq!(ice.len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let hotspots = sample();
        let filtered = filter_hotspots(
            &hotspots,
            &CategorySelection::parse("Volcano"),
            CategoryMatching::CaseSensitive,
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_case_sensitivity_is_configurable() {
        let hotspots = vec![hotspot("lower", "severe storms", 5)];
        let selection = CategorySelection::parse("Storm");

        assert!(filter_hotspots(&hotspots, &selection, CategoryMatching::CaseSensitive).is_empty());
        assert_eq!(
            filter_hotspots(&hotspots, &selection, CategoryMatching::CaseInsensitive).len(),
            1
        );
    }
}
