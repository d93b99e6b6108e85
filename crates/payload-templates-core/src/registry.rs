//! Template registry
//!
//! The CLI ships exactly four law-firm website templates. Each one lives in
//! its own subdirectory of the remote template repository. The registry is
//! fixed at compile time and lookups are exact, case-sensitive string
//! matches on the template slug.

use std::fmt;

/// A selectable project starter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Unique slug, e.g. `modern`
    pub value: &'static str,

    /// Display name
    pub title: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Two-color swatch, formatted as `#rrggbb + #rrggbb`
    pub colors: &'static str,

    /// Subdirectory of the remote repository holding the template files
    pub subpath: &'static str,
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

static TEMPLATES: [TemplateDescriptor; 4] = [
    TemplateDescriptor {
        value: "premium",
        title: "Premium",
        description: "Navy + Gold - Elegant, high-end law firms",
        colors: "#1a1f36 + #d4af37",
        subpath: "templates/premium",
    },
    TemplateDescriptor {
        value: "traditional",
        title: "Traditional",
        description: "Burgundy + Gold - Classic, established practices",
        colors: "#800020 + #d4af37",
        subpath: "templates/traditional",
    },
    TemplateDescriptor {
        value: "modern",
        title: "Modern",
        description: "Blue + White - Clean, contemporary firms",
        colors: "#4a90e2 + #ffffff",
        subpath: "templates/modern",
    },
    TemplateDescriptor {
        value: "boutique",
        title: "Boutique",
        description: "Green + Beige - Specialized, personal practices",
        colors: "#2c5f2d + #e8dcc4",
        subpath: "templates/boutique",
    },
];

/// All templates, in declared order
pub fn list() -> &'static [TemplateDescriptor] {
    &TEMPLATES
}

/// Look up a template by its slug
pub fn by_value(value: &str) -> Option<&'static TemplateDescriptor> {
    TEMPLATES.iter().find(|t| t.value == value)
}

/// Check whether `value` names a registered template
pub fn is_valid_template(value: &str) -> bool {
    TEMPLATES.iter().any(|t| t.value == value)
}

/// All template slugs, in declared order
pub fn values() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.value).collect()
}

/// The template preselected in the interactive prompt
pub fn default_template() -> &'static TemplateDescriptor {
    &TEMPLATES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_list_has_four_templates_in_order() {
        let values: Vec<_> = list().iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["premium", "traditional", "modern", "boutique"]);
    }

    #[test]
    fn test_colors_match_swatch_format() {
        let re = Regex::new(r"^#[0-9a-fA-F]{6} \+ #[0-9a-fA-F]{6}$").unwrap();
        for template in list() {
            assert!(
                re.is_match(template.colors),
                "bad swatch for {}: {}",
                template.value,
                template.colors
            );
        }
    }

    #[test]
    fn test_values_are_unique() {
        let mut values = values();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_by_value_is_case_sensitive() {
        assert!(by_value("premium").is_some());
        assert!(by_value("Premium").is_none());
        assert!(by_value("PREMIUM").is_none());
        assert!(by_value("").is_none());
    }

    #[test]
    fn test_subpath_follows_value() {
        for template in list() {
            assert_eq!(template.subpath, format!("templates/{}", template.value));
        }
    }

    #[test]
    fn test_default_template_is_first() {
        assert_eq!(default_template().value, "premium");
    }
}
