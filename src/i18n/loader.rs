//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection, and message formatting. The `ru`
//! and `en` catalogs are compiled in; a directory of `<lang>.json` files can
//! override them at startup.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, debug};
use crate::utils::errors::{SportClubError, Result};
use crate::config::I18nConfig;

const EMBEDDED: [(&str, &str); 2] = [
    ("ru", include_str!("../../translations/ru.json")),
    ("en", include_str!("../../translations/en.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    /// Language of the current user
    language: String,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create an I18n instance without any catalogs
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            language: config.default_language.clone(),
        }
    }

    /// Create an I18n instance with the compiled-in catalogs
    pub fn embedded(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self::new(config);
        for (lang_code, content) in EMBEDDED {
            if i18n.is_language_supported(lang_code) {
                i18n.load_language_str(lang_code, content)?;
            }
        }
        Ok(i18n)
    }

    /// Override catalogs from `<dir>/<lang>.json` files; missing files are skipped
    pub async fn load_translations(&mut self, dir: &Path) -> Result<()> {
        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = dir.join(format!("{}.json", lang_code));
            if !file_path.exists() {
                warn!("Translation file not found: {}", file_path.display());
                continue;
            }

            let content = fs::read_to_string(&file_path).await?;
            self.load_language_str(lang_code, &content)?;
            info!("Loaded translations for language: {}", lang_code);
        }

        Ok(())
    }

    /// Load (and merge over existing keys) one language catalog
    pub fn load_language_str(&mut self, lang_code: &str, content: &str) -> Result<()> {
        let translations: Value = serde_json::from_str(content)?;

        let Value::Object(map) = translations else {
            return Err(SportClubError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ));
        };

        let entry = self.translations.entry(lang_code.to_string()).or_default();
        merge(entry, map);
        debug!("Loaded {} top-level translation keys for {}", entry.len(), lang_code);
        Ok(())
    }

    /// Switch the active language; unsupported codes fall back to the default
    pub fn set_language(&mut self, lang: &str) {
        self.language = self.get_effective_language(lang);
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translated message in the active language
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Get a translated message with `{name}` placeholders filled in
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let params: TranslationParams = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.translate(key, Some(&params))
    }

    /// Get a translated message with pluralization support
    pub fn tp(&self, key: &str, count: i64, params: Option<&TranslationParams>) -> String {
        let plural_key = format!("{}.{}", key, self.get_plural_form(count, &self.language));

        let mut final_params = params.cloned().unwrap_or_default();
        final_params.insert("count".to_string(), count.to_string());

        self.translate(&plural_key, Some(&final_params))
    }

    fn translate(&self, key: &str, params: Option<&TranslationParams>) -> String {
        let value = self
            .get_translation_value(key, &self.language)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match value {
            Some(translation) => {
                let text = self.extract_text_from_value(translation);
                self.format_message(&text, params)
            }
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let mut keys = key.split('.');
        let mut current = self.translations.get(lang)?.get(keys.next()?)?;

        for k in keys {
            current = current.get(k)?;
        }

        Some(current)
    }

    /// Extract text from JSON value (handle both strings and objects with pluralization)
    fn extract_text_from_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Object(obj) => {
                if let Some(other) = obj.get("other") {
                    self.extract_text_from_value(other)
                } else if let Some((_, first_value)) = obj.iter().next() {
                    self.extract_text_from_value(first_value)
                } else {
                    String::new()
                }
            }
            _ => value.to_string(),
        }
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        match params {
            Some(params) => {
                let mut result = template.to_string();
                for (key, value) in params {
                    result = result.replace(&format!("{{{}}}", key), value);
                }
                result
            }
            None => template.to_string(),
        }
    }

    /// Determine plural form based on language-specific rules
    fn get_plural_form(&self, count: i64, lang: &str) -> &'static str {
        match lang {
            "ru" => {
                let abs_count = count.abs();
                let last_digit = abs_count % 10;
                let last_two_digits = abs_count % 100;

                if last_digit == 1 && last_two_digits != 11 {
                    "one"
                } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two_digits) {
                    "few"
                } else {
                    "many"
                }
            }
            _ => {
                if count == 1 { "one" } else { "other" }
            }
        }
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Detect user language from a Telegram language code (`en-US` -> `en`)
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            let lang_code = lang.split('-').next().unwrap_or(lang);
            if self.is_language_supported(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }

    /// Get translation statistics
    pub fn get_stats(&self) -> TranslationStats {
        let mut languages: Vec<LanguageStats> = self
            .translations
            .iter()
            .map(|(code, translations)| LanguageStats {
                code: code.clone(),
                key_count: count_keys(translations),
            })
            .collect();
        languages.sort_by(|a, b| a.code.cmp(&b.code));

        let total_keys = languages
            .iter()
            .find(|l| l.code == self.default_language)
            .map_or(0, |l| l.key_count);

        TranslationStats { languages, total_keys }
    }
}

/// Recursively merge `overlay` into `base`
fn merge(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => merge(existing, nested),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Recursively count translation keys
fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> I18nConfig {
        I18nConfig {
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string()],
            translations_dir: None,
        }
    }

    #[test]
    fn test_plural_form_english() {
        let i18n = I18n::new(&create_test_config());

        assert_eq!(i18n.get_plural_form(0, "en"), "other");
        assert_eq!(i18n.get_plural_form(1, "en"), "one");
        assert_eq!(i18n.get_plural_form(5, "en"), "other");
    }

    #[test]
    fn test_plural_form_russian() {
        let i18n = I18n::new(&create_test_config());

        assert_eq!(i18n.get_plural_form(1, "ru"), "one");
        assert_eq!(i18n.get_plural_form(2, "ru"), "few");
        assert_eq!(i18n.get_plural_form(5, "ru"), "many");
        assert_eq!(i18n.get_plural_form(11, "ru"), "many");
        assert_eq!(i18n.get_plural_form(21, "ru"), "one");
    }

    #[test]
    fn test_language_detection() {
        let i18n = I18n::new(&create_test_config());

        assert_eq!(i18n.detect_user_language(Some("en-US")), "en");
        assert_eq!(i18n.detect_user_language(Some("ru")), "ru");
        assert_eq!(i18n.detect_user_language(Some("fr")), "ru");
        assert_eq!(i18n.detect_user_language(None), "ru");
    }

    #[test]
    fn test_embedded_catalogs_load() {
        let i18n = I18n::embedded(&create_test_config()).unwrap();
        let stats = i18n.get_stats();
        assert_eq!(stats.languages.len(), 2);
        assert!(stats.languages.iter().all(|l| l.key_count > 0));
        assert!(stats.total_keys > 0);
    }

    #[test]
    fn test_translation_with_params_and_fallback() {
        let mut i18n = I18n::new(&create_test_config());
        i18n.load_language_str("ru", r#"{"errors": {"prefix": "Ошибка: {error}"}, "only_ru": "только"}"#).unwrap();
        i18n.load_language_str("en", r#"{"errors": {"prefix": "Error: {error}"}}"#).unwrap();

        assert_eq!(i18n.tf("errors.prefix", &[("error", "boom")]), "Ошибка: boom");

        i18n.set_language("en");
        assert_eq!(i18n.language(), "en");
        assert_eq!(i18n.tf("errors.prefix", &[("error", "boom")]), "Error: boom");
        assert_eq!(i18n.t("only_ru"), "только");
        assert_eq!(i18n.t("missing.key"), "missing.key");
    }

    #[test]
    fn test_override_merges_nested_keys() {
        let mut i18n = I18n::new(&create_test_config());
        i18n.load_language_str("ru", r#"{"a": {"x": "1", "y": "2"}}"#).unwrap();
        i18n.load_language_str("ru", r#"{"a": {"y": "3"}}"#).unwrap();
        assert_eq!(i18n.t("a.x"), "1");
        assert_eq!(i18n.t("a.y"), "3");
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let mut i18n = I18n::embedded(&create_test_config()).unwrap();
        i18n.set_language("de");
        assert_eq!(i18n.language(), "ru");
    }
}
