//! Priority categories used to group issue templates

use serde::Deserialize;

/// Priority group an issue template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HighPriority,
    #[default]
    MediumPriority,
    LowPriority,
    CodeQuality,
}

impl Category {
    /// All categories in breakdown order
    pub const ALL: [Category; 4] = [
        Self::HighPriority,
        Self::MediumPriority,
        Self::LowPriority,
        Self::CodeQuality,
    ];

    /// Human readable label used in the run summary
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighPriority => "High Priority Issues",
            Self::MediumPriority => "Medium Priority Issues",
            Self::LowPriority => "Low Priority Issues",
            Self::CodeQuality => "Code Quality",
        }
    }

    /// Marker printed next to the label
    pub fn marker(&self) -> &'static str {
        match self {
            Self::HighPriority => "🔴",
            Self::MediumPriority => "🟡",
            Self::LowPriority => "🟢",
            Self::CodeQuality => "📝",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighPriority => write!(f, "high-priority"),
            Self::MediumPriority => write!(f, "medium-priority"),
            Self::LowPriority => write!(f, "low-priority"),
            Self::CodeQuality => write!(f, "code-quality"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ordering() {
        assert!(Category::HighPriority < Category::MediumPriority);
        assert!(Category::MediumPriority < Category::LowPriority);
        assert!(Category::LowPriority < Category::CodeQuality);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::HighPriority.to_string(), "high-priority");
        assert_eq!(Category::CodeQuality.to_string(), "code-quality");
    }

    #[test]
    fn test_category_serde() {
        let category: Category = serde_yaml::from_str("medium-priority").unwrap();
        assert_eq!(category, Category::MediumPriority);
        assert!(serde_yaml::from_str::<Category>("urgent").is_err());
    }
}
