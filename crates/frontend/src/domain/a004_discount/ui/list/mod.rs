use crate::domain::a004_discount::ui::details::DiscountDetails;
use crate::shared::crud_wizard::{
    CrudWizard, CrudWizardPage, FormProps, FormRenderer, HeaderCopy, ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellRule, CellValue, ColumnDescriptor, SearchField, TableConfig};
use contracts::domain::a004_discount::aggregate::{seed, Discount};
use contracts::shared::table_settings::TableSettings;
use leptos::prelude::*;
use std::sync::Arc;

/// Период действия одной строкой
fn period(d: &Discount) -> CellValue {
    let from = d.valid_from.format("%d.%m.%Y");
    match d.valid_until {
        Some(until) => CellValue::text(format!("{} - {}", from, until.format("%d.%m.%Y"))),
        None => CellValue::text(format!("с {}", from)),
    }
}

pub fn discount_config(settings: &TableSettings) -> ResourceConfig<Discount> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("name", "Наименование", |d: &Discount| CellValue::text(&d.name))
            .sortable()
            .min_width(200.0),
        ColumnDescriptor::new("percent", "Скидка", |d: &Discount| CellValue::Decimal(d.percent))
            .sortable()
            .rule(CellRule::Percent)
            .min_width(90.0),
        ColumnDescriptor::new("valid_from", "Начало", |d: &Discount| CellValue::Date(d.valid_from))
            .sortable(),
        ColumnDescriptor::new("period", "Период", period).min_width(200.0),
        ColumnDescriptor::new("is_active", "Активна", |d: &Discount| CellValue::Bool(d.is_active))
            .rule(CellRule::Flag),
    ]);
    table.search_fields = vec![SearchField::new("name", |d: &Discount| d.name.clone())];
    table.selection = true;

    ResourceConfig::new(table, settings).header(HeaderCopy::for_record::<Discount>())
}

#[component]
#[allow(non_snake_case)]
pub fn DiscountList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let config = discount_config(&settings);
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let rows = Signal::derive(move || store.with(|s| s.rows().to_vec()));

    let form: FormRenderer<Discount> = Arc::new(|props: FormProps<Discount>| {
        view! {
            <DiscountDetails
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
            icon_name="discount"
        />
    }
}
