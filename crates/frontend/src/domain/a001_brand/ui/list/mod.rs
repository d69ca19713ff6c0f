use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::shared::crud_wizard::{
    CrudWizard, CrudWizardPage, FormProps, FormRenderer, HeaderCopy, ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellRule, CellValue, ColumnDescriptor, SearchField, TableConfig};
use contracts::domain::a001_brand::aggregate::{seed, Brand};
use contracts::shared::table_settings::TableSettings;
use leptos::prelude::*;
use std::sync::Arc;

pub fn brand_config(settings: &TableSettings) -> ResourceConfig<Brand> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("code", "Код", |b: &Brand| CellValue::text(&b.code))
            .sortable()
            .min_width(90.0),
        ColumnDescriptor::new("name", "Наименование", |b: &Brand| CellValue::text(&b.name))
            .sortable()
            .min_width(200.0),
        ColumnDescriptor::new("country", "Страна", |b: &Brand| CellValue::text(&b.country)).sortable(),
        ColumnDescriptor::new("comment", "Комментарий", |b: &Brand| {
            CellValue::opt_text(b.comment.as_deref())
        }),
        ColumnDescriptor::new("is_active", "Активен", |b: &Brand| CellValue::Bool(b.is_active))
            .sortable()
            .rule(CellRule::Flag)
            .min_width(80.0),
    ]);
    table.search_fields = vec![
        SearchField::new("code", |b: &Brand| b.code.clone()),
        SearchField::new("name", |b: &Brand| b.name.clone()),
        SearchField::new("country", |b: &Brand| b.country.clone()),
    ];
    table.selection = true;

    ResourceConfig::new(table, settings)
        .header(HeaderCopy::for_record::<Brand>().subtitle("Торговые марки товаров"))
}

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let config = brand_config(&settings);
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let rows = Signal::derive(move || store.with(|s| s.rows().to_vec()));

    let form: FormRenderer<Brand> = Arc::new(|props: FormProps<Brand>| {
        view! {
            <BrandDetails
                initial=props.initial
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
            icon_name="brand"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::{derive_view, TableState};

    #[test]
    fn test_brand_config() {
        let config = brand_config(&TableSettings::default());
        assert_eq!(config.resource_key, "brand");
        assert!(config.bulk_enabled());
        assert_eq!(config.table.columns.len(), 5);
        assert!(config.table.column("comment").is_some_and(|c| !c.sortable));
    }

    #[test]
    fn test_brand_search_and_pager() {
        let config = brand_config(&TableSettings::default());
        let rows = seed();
        let mut state = TableState::new(config.paging.default_page_size);
        let view = derive_view(&rows, &state, &config.table);
        assert!(view.show_pagination);
        assert_eq!(view.page_count, 2);

        state.set_global_filter("india");
        let view = derive_view(&rows, &state, &config.table);
        assert!(view.total_filtered > 0);
        assert!(view.rows.iter().all(|r| r.row.country == "India"));
    }
}
