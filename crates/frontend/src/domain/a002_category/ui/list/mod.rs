use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::crud_wizard::{
    CrudWizard, CrudWizardPage, DeleteDialogCopy, FormProps, FormRenderer, HeaderCopy,
    ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellRule, CellValue, ColumnDescriptor, SearchField, TableConfig};
use contracts::domain::a002_category::aggregate::{seed, Category};
use contracts::shared::table_settings::TableSettings;
use leptos::prelude::*;
use std::sync::Arc;

/// Категории без массового выбора: удаление только по одной
pub fn category_config(settings: &TableSettings) -> ResourceConfig<Category> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("name", "Наименование", |c: &Category| CellValue::text(&c.name))
            .sortable()
            .min_width(180.0),
        ColumnDescriptor::new("path", "Путь", |c: &Category| CellValue::text(c.path())).min_width(260.0),
        ColumnDescriptor::new("description", "Описание", |c: &Category| {
            CellValue::opt_text(Some(c.description.as_str()))
        }),
        ColumnDescriptor::new("sort_order", "Порядок", |c: &Category| {
            CellValue::Integer(i64::from(c.sort_order))
        })
        .sortable()
        .rule(CellRule::Number { decimals: 0 })
        .min_width(80.0),
    ]);
    table.search_fields = vec![
        SearchField::new("name", |c: &Category| c.name.clone()),
        SearchField::new("parent", |c: &Category| c.parent.clone().unwrap_or_default()),
    ];

    ResourceConfig::new(table, settings)
        .header(HeaderCopy::for_record::<Category>().subtitle("Дерево категорий товаров"))
        .delete_dialog(DeleteDialogCopy {
            single_template: "Удалить категорию «{name}»? Подкатегории останутся без родителя."
                .to_string(),
            ..Default::default()
        })
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let config = category_config(&settings);
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let rows = Signal::derive(move || store.with(|s| s.rows().to_vec()));

    let form: FormRenderer<Category> = Arc::new(move |props: FormProps<Category>| {
        let parents: Vec<String> =
            store.with_untracked(|s| s.rows().iter().map(|c| c.name.clone()).collect());
        view! {
            <CategoryDetails
                initial=props.initial
                parents=parents
                on_submit=props.on_submit
                on_cancel=props.on_cancel
            />
        }
        .into_any()
    });

    view! {
        <CrudWizardPage
            config=config
            rows=rows
            wizard=wizard
            form=form
            on_submit=Callback::new(move |submission| {
                // ошибку выдачи ID хранилище уже записало в лог
                store.update(|s| {
                    let _ = s.apply_submission(submission);
                })
            })
            on_delete=Callback::new(move |request| {
                store.update(|s| {
                    s.apply_delete(&request);
                })
            })
            icon_name="category"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::{derive_view, TableState};

    #[test]
    fn test_small_collection_has_no_pager() {
        let config = category_config(&TableSettings::default());
        assert!(!config.bulk_enabled());
        let rows = seed();
        let view = derive_view(&rows, &TableState::new(10), &config.table);
        assert_eq!(view.rows.len(), 7);
        assert!(!view.show_pagination);
    }

    #[test]
    fn test_search_by_parent() {
        let config = category_config(&TableSettings::default());
        let rows = seed();
        let mut state = TableState::new(10);
        state.set_global_filter("крепёж");
        let names: Vec<&str> = derive_view(&rows, &state, &config.table)
            .rows
            .iter()
            .map(|r| r.row.name.as_str())
            .collect();
        assert_eq!(names, vec!["Крепёж", "Саморезы"]);
    }

    #[test]
    fn test_delete_copy() {
        let config = category_config(&TableSettings::default());
        assert!(config
            .delete_dialog
            .render_single("Крепёж")
            .starts_with("Удалить категорию «Крепёж»"));
    }
}
