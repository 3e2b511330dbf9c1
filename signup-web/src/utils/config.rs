//! Page-supplied configuration

use lib_form::FormConfig;
use web_sys::Document;

use super::constants::CONFIG_ELEMENT_ID;

/// Read the JSON override embedded in the page, falling back to defaults when it
/// is absent or invalid.
pub fn load_config(document: &Document) -> FormConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FormConfig::default();
    };

    let json = element.text_content().unwrap_or_default();
    match FormConfig::from_json(&json) {
        Ok(config) => {
            log::info!("[Form] Loaded configuration from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            log::error!("[Form] {} (#{}), using defaults", err, CONFIG_ELEMENT_ID);
            FormConfig::default()
        }
    }
}
