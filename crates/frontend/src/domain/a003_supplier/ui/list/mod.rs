use crate::domain::a003_supplier::ui::details::SupplierDetails;
use crate::shared::crud_wizard::{
    filtered_rows, tag_filter_toolbar, CrudWizard, CrudWizardPage, FormProps, FormRenderer,
    HeaderCopy, ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellValue, ColumnDescriptor, SearchField, TableConfig};
use crate::shared::tag_filter::TagFilterSet;
use contracts::domain::a003_supplier::aggregate::{seed, Supplier};
use contracts::shared::table_settings::TableSettings;
use leptos::prelude::*;
use std::sync::Arc;

pub fn supplier_config(settings: &TableSettings) -> ResourceConfig<Supplier> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("name", "Наименование", |s: &Supplier| CellValue::text(&s.name))
            .sortable()
            .min_width(220.0),
        ColumnDescriptor::new("contact_email", "Email", |s: &Supplier| {
            CellValue::opt_text(Some(s.contact_email.as_str()))
        })
        .sortable(),
        ColumnDescriptor::new("phone", "Телефон", |s: &Supplier| {
            CellValue::opt_text(Some(s.phone.as_str()))
        }),
        ColumnDescriptor::new("tags", "Атрибуты", |s: &Supplier| CellValue::text(s.tags_summary()))
            .min_width(260.0),
    ]);
    table.search_fields = vec![
        SearchField::new("name", |s: &Supplier| s.name.clone()),
        SearchField::new("contact_email", |s: &Supplier| s.contact_email.clone()),
    ];
    table.selection = true;

    ResourceConfig::new(table, settings)
        .header(HeaderCopy::for_record::<Supplier>().subtitle("Поставщики и их атрибуты"))
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let config = supplier_config(&settings);
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let tag_filter = RwSignal::new(TagFilterSet::new());

    let form: FormRenderer<Supplier> = Arc::new(|props: FormProps<Supplier>| {
        view! {
            <SupplierDetails
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
            icon_name="suppliers"
            toolbar=tag_filter_toolbar(store, wizard, tag_filter)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud_wizard::DeleteRequest;
    use crate::shared::table_engine::derive_view;
    use contracts::shared::tags::AttributeTag;

    #[test]
    fn test_tag_filter_then_bulk_delete() {
        let config = supplier_config(&TableSettings::default());
        let mut store = RecordStore::new(seed());
        let mut wizard: CrudWizard<Supplier> = CrudWizard::new(10, config.bulk_enabled());

        let mut filter = TagFilterSet::new();
        filter.add(AttributeTag::single("Country", "India")).unwrap();
        wizard.rows_replaced();
        assert_eq!(wizard.select_matching(filter.matching_ids(store.rows())), Ok(2));

        let visible = filter.apply(store.rows());
        let view = derive_view(&visible, wizard.table(), &config.table);
        assert_eq!(view.visible_ids(), vec![1, 4]);

        wizard.request_bulk_delete().unwrap();
        let mut request = None;
        wizard.confirm_delete(|r| request = Some(r)).unwrap();
        assert_eq!(request, Some(DeleteRequest::Bulk(vec![1, 4])));
        store.apply_delete(&request.unwrap());
        assert!(filter.apply(store.rows()).is_empty());

        filter.clear();
        let ids: Vec<u32> = filter.apply(store.rows()).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 6]);
    }
}
