/// Presentation colors for a category badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryColor {
    /// Translucent background tint.
    pub tint: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

const TECHNOLOGY: CategoryColor = CategoryColor {
    tint: "rgba(59, 130, 246, 0.1)",
    text: "#3b82f6",
    border: "#3b82f6",
};
const DESIGN: CategoryColor = CategoryColor {
    tint: "rgba(236, 72, 153, 0.1)",
    text: "#ec4899",
    border: "#ec4899",
};
const BUSINESS: CategoryColor = CategoryColor {
    tint: "rgba(16, 185, 129, 0.1)",
    text: "#10b981",
    border: "#10b981",
};
const LIFESTYLE: CategoryColor = CategoryColor {
    tint: "rgba(245, 158, 11, 0.1)",
    text: "#f59e0b",
    border: "#f59e0b",
};
const HEALTH: CategoryColor = CategoryColor {
    tint: "rgba(239, 68, 68, 0.1)",
    text: "#ef4444",
    border: "#ef4444",
};
const TRAVEL: CategoryColor = CategoryColor {
    tint: "rgba(6, 182, 212, 0.1)",
    text: "#06b6d4",
    border: "#06b6d4",
};

/// Slate fallback for unknown or missing categories.
pub const DEFAULT_CATEGORY_COLOR: CategoryColor = CategoryColor {
    tint: "rgba(100, 116, 139, 0.1)",
    text: "#64748b",
    border: "#64748b",
};

/// Resolve the badge colors for a category name, case-insensitively.
///
/// Total over its input: `None`, empty and unrecognized names all map to
/// [`DEFAULT_CATEGORY_COLOR`].
pub fn category_color(name: Option<&str>) -> CategoryColor {
    let Some(name) = name else {
        return DEFAULT_CATEGORY_COLOR;
    };

    match name.trim().to_lowercase().as_str() {
        "technology" => TECHNOLOGY,
        "design" => DESIGN,
        "business" => BUSINESS,
        "lifestyle" => LIFESTYLE,
        "health" => HEALTH,
        "travel" => TRAVEL,
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

impl CategoryColor {
    /// Inline style string for a badge tinted with this color.
    pub fn badge_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; border-color: {}40;",
            self.tint, self.text, self.border
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_resolve_case_insensitively() {
        assert_eq!(category_color(Some("technology")).text, "#3b82f6");
        assert_eq!(category_color(Some("Technology")).text, "#3b82f6");
        assert_eq!(category_color(Some("DESIGN")).text, "#ec4899");
        assert_eq!(category_color(Some("Business")).text, "#10b981");
        assert_eq!(category_color(Some("lifestyle")).text, "#f59e0b");
        assert_eq!(category_color(Some("Health")).text, "#ef4444");
        assert_eq!(category_color(Some("travel")).text, "#06b6d4");
    }

    #[test]
    fn unknown_or_absent_names_use_the_default() {
        assert_eq!(category_color(None), DEFAULT_CATEGORY_COLOR);
        assert_eq!(category_color(Some("")), DEFAULT_CATEGORY_COLOR);
        assert_eq!(category_color(Some("poetry")), DEFAULT_CATEGORY_COLOR);
    }
}
