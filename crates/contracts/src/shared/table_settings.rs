use serde::Deserialize;

/// Настройки таблиц справочников
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableSettings {
    pub paging: PagingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PagingSettings {
    /// Размер страницы по умолчанию
    pub page_size: usize,
    /// Варианты размера страницы в селекторе
    pub page_size_options: Vec<usize>,
    /// Сколько номеров страниц показывать в пейджере
    pub visible_pages: usize,
    /// Пейджер показывается, только если строк больше этого порога
    pub pagination_threshold: usize,
}

/// Default settings embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[paging]
page_size = 10
page_size_options = [10, 20, 50]
visible_pages = 5
pagination_threshold = 10
"#;

impl TableSettings {
    /// Parse settings from a TOML document and normalise out-of-range values
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let settings: TableSettings = toml::from_str(contents)?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        let p = &mut self.paging;
        p.page_size = p.page_size.max(1);
        p.visible_pages = p.visible_pages.max(3);
        p.page_size_options.retain(|s| *s > 0);
        if !p.page_size_options.contains(&p.page_size) {
            p.page_size_options.push(p.page_size);
            p.page_size_options.sort_unstable();
        }
        self
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            paging: PagingSettings {
                page_size: 10,
                page_size_options: vec![10, 20, 50],
                visible_pages: 5,
                pagination_threshold: 10,
            },
        }
    }
}

/// Load settings from an optional override document
///
/// Falls back to the embedded defaults when the override is absent or invalid.
pub fn load_settings(overrides: Option<&str>) -> TableSettings {
    if let Some(contents) = overrides {
        match TableSettings::from_toml_str(contents) {
            Ok(settings) => {
                log::info!("Using table settings override");
                return settings;
            }
            Err(e) => log::warn!("Invalid table settings, using defaults: {}", e),
        }
    }
    TableSettings::from_toml_str(DEFAULT_SETTINGS).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = TableSettings::from_toml_str(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings, TableSettings::default());
        assert_eq!(settings.paging.pagination_threshold, 10);
    }

    #[test]
    fn test_values_are_normalised() {
        let settings = TableSettings::from_toml_str(
            r#"
[paging]
page_size = 0
page_size_options = [0, 25]
visible_pages = 1
pagination_threshold = 10
"#,
        )
        .unwrap();
        assert_eq!(settings.paging.page_size, 1);
        assert_eq!(settings.paging.page_size_options, vec![1, 25]);
        assert_eq!(settings.paging.visible_pages, 3);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(load_settings(Some("not = [valid")), TableSettings::default());
        assert_eq!(load_settings(None), TableSettings::default());
    }
}
