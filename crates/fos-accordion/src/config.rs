//! Accordion Configuration
//!
//! The naming scheme an accordion instance uses: marker classes, data
//! attributes, style classes, roles, ARIA attribute names and id tokens.
//! Overrides are read from JSON using the upper-case keys the widget has
//! always used (`ACCORDION_JS`, `ATTR_EXPANDED`, ...). Missing keys keep
//! their defaults.

use serde::Deserialize;

use crate::AccordionResult;

/// Attribute tagging every node an accordion instance owns.
///
/// Not configurable: the delegated listener needs it to find the instance
/// before it knows which configuration applies.
pub const DATA_HASH_ID: &str = "data-hashaccordion-id";

/// Accordion configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccordionConfig {
    /// Marker class of accordion containers
    #[serde(rename = "ACCORDION_JS")]
    pub accordion_js: String,
    /// Marker class of headers (moves to the generated button)
    #[serde(rename = "ACCORDION_JS_HEADER")]
    pub accordion_js_header: String,
    /// Marker class authors put on panels
    #[serde(rename = "ACCORDION_JS_PANEL")]
    pub accordion_js_panel: String,

    /// Container attribute holding the style-class prefix
    #[serde(rename = "ACCORDION_DATA_PREFIX_CLASS")]
    pub data_prefix_class: String,
    /// Header attribute marking it initially expanded
    #[serde(rename = "ACCORDION_DATA_OPENED")]
    pub data_opened: String,
    /// Container attribute; `"none"` switches to single-select
    #[serde(rename = "ACCORDION_DATA_MULTISELECTABLE")]
    pub data_multiselectable: String,
    /// Container attribute allowing headers below direct children
    #[serde(rename = "ACCORDION_DATA_COOL_SELECTORS")]
    pub data_cool_selectors: String,

    #[serde(rename = "ACCORDION_PREFIX_IDS")]
    pub prefix_ids: String,
    #[serde(rename = "ACCORDION_BUTTON_ID")]
    pub button_id: String,
    #[serde(rename = "ACCORDION_PANEL_ID")]
    pub panel_id: String,

    #[serde(rename = "ACCORDION_STYLE")]
    pub style: String,
    #[serde(rename = "ACCORDION_TITLE_STYLE")]
    pub title_style: String,
    #[serde(rename = "ACCORDION_HEADER_STYLE")]
    pub header_style: String,
    #[serde(rename = "ACCORDION_PANEL_STYLE")]
    pub panel_style: String,

    #[serde(rename = "ACCORDION_ROLE_TABLIST")]
    pub role_tablist: String,
    #[serde(rename = "ACCORDION_ROLE_TAB")]
    pub role_tab: String,
    #[serde(rename = "ACCORDION_ROLE_TABPANEL")]
    pub role_tabpanel: String,

    #[serde(rename = "ATTR_ROLE")]
    pub attr_role: String,
    #[serde(rename = "ATTR_MULTISELECTABLE")]
    pub attr_multiselectable: String,
    #[serde(rename = "ATTR_EXPANDED")]
    pub attr_expanded: String,
    #[serde(rename = "ATTR_LABELLEDBY")]
    pub attr_labelledby: String,
    #[serde(rename = "ATTR_HIDDEN")]
    pub attr_hidden: String,
    #[serde(rename = "ATTR_CONTROLS")]
    pub attr_controls: String,
    #[serde(rename = "ATTR_SELECTED")]
    pub attr_selected: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            accordion_js: "js-accordion".to_string(),
            accordion_js_header: "js-accordion__header".to_string(),
            accordion_js_panel: "js-accordion__panel".to_string(),

            data_prefix_class: "data-accordion-prefix-classes".to_string(),
            data_opened: "data-accordion-opened".to_string(),
            data_multiselectable: "data-accordion-multiselectable".to_string(),
            data_cool_selectors: "data-accordion-cool-selectors".to_string(),

            prefix_ids: "accordion".to_string(),
            button_id: "_tab".to_string(),
            panel_id: "_panel".to_string(),

            style: "accordion".to_string(),
            title_style: "accordion__title".to_string(),
            header_style: "accordion__header".to_string(),
            panel_style: "accordion__panel".to_string(),

            role_tablist: "tablist".to_string(),
            role_tab: "tab".to_string(),
            role_tabpanel: "tabpanel".to_string(),

            attr_role: "role".to_string(),
            attr_multiselectable: "aria-multiselectable".to_string(),
            attr_expanded: "aria-expanded".to_string(),
            attr_labelledby: "aria-labelledby".to_string(),
            attr_hidden: "aria-hidden".to_string(),
            attr_controls: "aria-controls".to_string(),
            attr_selected: "aria-selected".to_string(),
        }
    }
}

impl AccordionConfig {
    /// Merge a JSON override record over the defaults
    pub fn from_json(json: &str) -> AccordionResult<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Id of the generated button for the `index`-th header (1-based)
    pub fn tab_id(&self, instance: &str, index: usize) -> String {
        format!("{}{}{}{}", self.prefix_ids, instance, self.button_id, index)
    }

    /// Id of the `index`-th panel (1-based)
    pub fn panel_element_id(&self, instance: &str, index: usize) -> String {
        format!("{}{}{}{}", self.prefix_ids, instance, self.panel_id, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccordionError;

    #[test]
    fn test_defaults() {
        let config = AccordionConfig::default();
        assert_eq!(config.accordion_js, "js-accordion");
        assert_eq!(config.attr_selected, "aria-selected");
        assert_eq!(config.tab_id("z1", 2), "accordionz1_tab2");
        assert_eq!(config.panel_element_id("z1", 2), "accordionz1_panel2");
    }

    #[test]
    fn test_override_merges_over_defaults() {
        let config = AccordionConfig::from_json(
            r#"{ "ACCORDION_JS": "js-faq", "ACCORDION_PREFIX_IDS": "faq" }"#,
        )
        .unwrap();
        assert_eq!(config.accordion_js, "js-faq");
        assert_eq!(config.prefix_ids, "faq");
        assert_eq!(config.accordion_js_header, "js-accordion__header");
    }

    #[test]
    fn test_empty_override_is_default() {
        assert_eq!(AccordionConfig::from_json("{}").unwrap(), AccordionConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AccordionConfig::from_json(r#"{ "ACCORDION_JSS": "x" }"#).unwrap_err();
        assert!(matches!(err, AccordionError::Config(_)));
    }
}
