//! Конфигурация экрана справочника: тексты, колонки, пейджер

use crate::shared::table_engine::TableConfig;
use contracts::domain::common::MasterRecord;
use contracts::shared::table_settings::TableSettings;

/// Заголовок страницы и подписи кнопок
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCopy {
    pub title: String,
    pub subtitle: Option<String>,
    pub add_label: String,
}

impl HeaderCopy {
    pub fn for_record<T: MasterRecord>() -> Self {
        Self {
            title: T::list_name().to_string(),
            subtitle: None,
            add_label: "Добавить".to_string(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Тексты подтверждения удаления
///
/// В шаблонах подставляются `{name}` (одна запись) и `{count}` (массовое).
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDialogCopy {
    pub title: String,
    pub single_template: String,
    pub bulk_template: String,
    pub confirm_label: String,
}

impl Default for DeleteDialogCopy {
    fn default() -> Self {
        Self {
            title: "Подтверждение удаления".to_string(),
            single_template: "Удалить «{name}»? Действие нельзя отменить.".to_string(),
            bulk_template: "Удалить выбранные записи ({count})? Действие нельзя отменить."
                .to_string(),
            confirm_label: "Удалить".to_string(),
        }
    }
}

impl DeleteDialogCopy {
    pub fn render_single(&self, name: &str) -> String {
        self.single_template.replace("{name}", name)
    }

    pub fn render_bulk(&self, count: usize) -> String {
        self.bulk_template.replace("{count}", &count.to_string())
    }
}

/// Параметры пейджера, взятые из настроек таблиц
#[derive(Debug, Clone, PartialEq)]
pub struct PagingOptions {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub visible_pages: usize,
    pub pagination_threshold: usize,
}

impl PagingOptions {
    pub fn from_settings(settings: &TableSettings) -> Self {
        let p = &settings.paging;
        Self {
            page_sizes: p.page_size_options.clone(),
            default_page_size: p.page_size,
            visible_pages: p.visible_pages,
            pagination_threshold: p.pagination_threshold,
        }
    }

    /// Компактный пейджер для узких экранов
    pub fn compact(mut self) -> Self {
        self.visible_pages = 3;
        self
    }
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self::from_settings(&TableSettings::default())
    }
}

/// Полная конфигурация одного экрана справочника
pub struct ResourceConfig<T> {
    /// Ключ ресурса (совпадает с `MasterRecord::collection_name`)
    pub resource_key: &'static str,
    pub header: HeaderCopy,
    pub table: TableConfig<T>,
    pub delete_dialog: DeleteDialogCopy,
    pub paging: PagingOptions,
}

impl<T: MasterRecord> ResourceConfig<T> {
    pub fn new(table: TableConfig<T>, settings: &TableSettings) -> Self {
        let paging = PagingOptions::from_settings(settings);
        let mut table = table;
        table.pagination_threshold = paging.pagination_threshold;
        Self {
            resource_key: T::collection_name(),
            header: HeaderCopy::for_record::<T>(),
            table,
            delete_dialog: DeleteDialogCopy::default(),
            paging,
        }
    }

    pub fn header(mut self, header: HeaderCopy) -> Self {
        self.header = header;
        self
    }

    pub fn delete_dialog(mut self, copy: DeleteDialogCopy) -> Self {
        self.delete_dialog = copy;
        self
    }

    pub fn bulk_enabled(&self) -> bool {
        self.table.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::{CellValue, ColumnDescriptor};
    use contracts::domain::a001_brand::aggregate::Brand;

    #[test]
    fn test_delete_copy_templates() {
        let copy = DeleteDialogCopy::default();
        assert!(copy.render_single("Acme").contains("«Acme»"));
        assert!(copy.render_bulk(3).contains("(3)"));
    }

    #[test]
    fn test_config_takes_paging_from_settings() {
        let settings = TableSettings::from_toml_str(
            "[paging]\npage_size = 20\npage_size_options = [10, 50]\nvisible_pages = 7\npagination_threshold = 25\n",
        )
        .unwrap();
        let table = TableConfig::new(vec![ColumnDescriptor::new("name", "Название", |b: &Brand| {
            CellValue::text(&b.name)
        })]);
        let config = ResourceConfig::new(table, &settings);
        assert_eq!(config.resource_key, "brand");
        assert_eq!(config.header.title, "Бренды");
        assert_eq!(config.paging.default_page_size, 20);
        assert_eq!(config.paging.page_sizes, vec![10, 20, 50]);
        assert_eq!(config.table.pagination_threshold, 25);
        assert_eq!(config.paging.clone().compact().visible_pages, 3);
        assert!(!config.bulk_enabled());
    }
}
