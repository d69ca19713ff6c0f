use crate::domain::a005_alarm::ui::details::AlarmDetails;
use crate::shared::crud_wizard::{
    filtered_rows, tag_filter_toolbar, CrudWizard, CrudWizardPage, FormProps, FormRenderer,
    HeaderCopy, ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellRule, CellValue, ColumnDescriptor, SearchField, TableConfig};
use crate::shared::tag_filter::TagFilterSet;
use contracts::domain::a005_alarm::aggregate::{seed, Alarm};
use contracts::shared::table_settings::TableSettings;
use leptos::prelude::*;
use std::sync::Arc;

fn tags_summary(a: &Alarm) -> CellValue {
    let summary: Vec<String> = a.tags.iter().map(ToString::to_string).collect();
    CellValue::opt_text(Some(summary.join("; ").as_str()))
}

pub fn alarm_config(settings: &TableSettings) -> ResourceConfig<Alarm> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("title", "Название", |a: &Alarm| CellValue::text(&a.title))
            .sortable()
            .min_width(240.0),
        ColumnDescriptor::new("severity", "Важность", |a: &Alarm| CellValue::text(a.severity.as_str()))
            .rule(CellRule::Badge),
        ColumnDescriptor::new("threshold", "Порог", |a: &Alarm| CellValue::Decimal(a.threshold))
            .sortable()
            .rule(CellRule::Number { decimals: 1 }),
        ColumnDescriptor::new("last_triggered_at", "Срабатывание", |a: &Alarm| {
            a.last_triggered_at.map_or(CellValue::Empty, CellValue::DateTime)
        })
        .sortable()
        .min_width(150.0),
        ColumnDescriptor::new("tags", "Атрибуты", tags_summary).min_width(200.0),
    ]);
    table.search_fields = vec![SearchField::new("title", |a: &Alarm| a.title.clone())];
    table.selection = true;

    ResourceConfig::new(table, settings)
        .header(HeaderCopy::for_record::<Alarm>().subtitle("Правила оповещений"))
}

#[component]
#[allow(non_snake_case)]
pub fn AlarmList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let mut config = alarm_config(&settings);
    config.paging = config.paging.compact();
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let tag_filter = RwSignal::new(TagFilterSet::new());

    let form: FormRenderer<Alarm> = Arc::new(|props: FormProps<Alarm>| {
        view! {
            <AlarmDetails
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
            rows=filtered_rows(store, tag_filter)
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
            icon_name="alarm"
            toolbar=tag_filter_toolbar(store, wizard, tag_filter)
        />
    }
}
