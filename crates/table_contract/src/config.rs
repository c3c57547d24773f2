//! Table presentation options.

use serde::{Deserialize, Serialize};

use crate::error::TableContractError;
use crate::pagination::PageSize;
use crate::sorting::SortCycle;

const DEFAULT_VISIBLE_PAGE_BUTTONS: usize = 5;
const DEFAULT_EMPTY_MESSAGE: &str = "No results.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Recognized table options. Unknown keys fail to decode.
pub struct TableConfig {
    /// Sizes offered by the page-size selector. Must be non-empty.
    pub page_sizes: Vec<PageSize>,
    /// Size a view should start with. Must be one of `page_sizes`.
    pub default_page_size: PageSize,
    /// Header-click cycle policy.
    pub sort_cycle: SortCycle,
    /// Numbered page buttons shown around the current page. At least 1.
    pub visible_page_buttons: usize,
    /// Message rendered when there are no rows.
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_sizes: PageSize::ALL.to_vec(),
            default_page_size: PageSize::Ten,
            sort_cycle: SortCycle::TriState,
            visible_page_buttons: DEFAULT_VISIBLE_PAGE_BUTTONS,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl TableConfig {
    /// Decodes and validates a JSON config document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TableContractError::InvalidConfig`] for malformed JSON,
    /// unknown keys, unsupported page sizes, or failed validation.
    pub fn from_json(raw: &str) -> Result<Self, TableContractError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| TableContractError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), TableContractError> {
        if self.page_sizes.is_empty() {
            return Err(TableContractError::InvalidConfig(
                "page_sizes must not be empty".to_string(),
            ));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(TableContractError::InvalidConfig(format!(
                "default_page_size {} is not offered in page_sizes",
                self.default_page_size.get()
            )));
        }
        if self.visible_page_buttons == 0 {
            return Err(TableContractError::InvalidConfig(
                "visible_page_buttons must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(TableConfig::from_json("{}").unwrap(), TableConfig::default());
    }

    #[test]
    fn recognized_options_override_defaults() {
        let config = TableConfig::from_json(
            r#"{"page_sizes":[25,50],"default_page_size":25,"sort_cycle":"asc_desc"}"#,
        )
        .unwrap();
        assert_eq!(config.page_sizes, vec![PageSize::TwentyFive, PageSize::Fifty]);
        assert_eq!(config.default_page_size, PageSize::TwentyFive);
        assert_eq!(config.sort_cycle, SortCycle::AscDesc);
        assert_eq!(config.visible_page_buttons, 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = TableConfig::from_json(r#"{"striped":true}"#).unwrap_err();
        assert!(matches!(err, TableContractError::InvalidConfig(msg) if msg.contains("striped")));
    }

    #[test]
    fn unsupported_page_size_is_rejected() {
        assert!(TableConfig::from_json(r#"{"page_sizes":[10,20]}"#).is_err());
    }

    #[test]
    fn default_size_must_be_offered() {
        let err = TableConfig::from_json(r#"{"page_sizes":[50]}"#).unwrap_err();
        assert_eq!(
            err,
            TableContractError::InvalidConfig(
                "default_page_size 10 is not offered in page_sizes".to_string()
            )
        );
        assert!(TableConfig::from_json(r#"{"visible_page_buttons":0}"#).is_err());
    }
}
