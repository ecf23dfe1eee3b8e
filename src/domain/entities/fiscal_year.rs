//! Selectable fiscal years.

/// Label preselected when the caller supplies none.
pub const DEFAULT_FISCAL_YEAR: &str = "2081/082";

const BUILTIN_FISCAL_YEARS: [&str; 4] = ["2079/080", "2080/081", "2081/082", "2082/083"];

/// Ordered options of the fiscal-year select, with its default.
///
/// Labels are opaque strings; the login flow never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearCatalog {
    options: Vec<String>,
    default_label: String,
}

impl FiscalYearCatalog {
    /// Builds a catalogue from explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` is empty or does not contain
    /// `default_label`.
    pub fn new(options: Vec<String>, default_label: impl Into<String>) -> Result<Self, String> {
        let default_label = default_label.into();

        if options.is_empty() {
            return Err("fiscal year catalogue must not be empty".to_string());
        }
        if !options.iter().any(|o| *o == default_label) {
            return Err(format!(
                "default fiscal year '{default_label}' is not one of the options"
            ));
        }

        Ok(Self {
            options,
            default_label,
        })
    }

    /// Parses a comma-separated option list, skipping blank entries.
    pub fn parse_options(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    /// Position of a label in the option list.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }
}

impl Default for FiscalYearCatalog {
    fn default() -> Self {
        Self {
            options: BUILTIN_FISCAL_YEARS.iter().map(|s| s.to_string()).collect(),
            default_label: DEFAULT_FISCAL_YEAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = FiscalYearCatalog::default();

        assert_eq!(catalog.default_label(), "2081/082");
        assert!(catalog.contains("2081/082"));
        assert_eq!(catalog.options().len(), 4);
        assert_eq!(catalog.position("2079/080"), Some(0));
    }

    #[test]
    fn test_new_rejects_unknown_default() {
        let result = FiscalYearCatalog::new(vec!["2080/081".to_string()], "2081/082");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(FiscalYearCatalog::new(Vec::new(), "2081/082").is_err());
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(
            FiscalYearCatalog::parse_options(" 2080/081, ,2081/082 ,"),
            vec!["2080/081".to_string(), "2081/082".to_string()]
        );
    }
}
