use crate::shared::crud_wizard::{
    filtered_rows, tag_filter_toolbar, CrudWizard, CrudWizardPage, DeleteDialogCopy, FormProps,
    FormRenderer, HeaderCopy, ResourceConfig,
};
use crate::shared::data::store::RecordStore;
use crate::shared::table_engine::{CellRule, CellValue, ColumnDescriptor, SearchField, TableConfig};
use crate::shared::tag_filter::TagFilterSet;
use crate::system::users::ui::details::UserDetails;
use contracts::shared::table_settings::TableSettings;
use contracts::system::users::{seed, User};
use leptos::prelude::*;
use std::sync::Arc;

pub fn users_config(settings: &TableSettings) -> ResourceConfig<User> {
    let mut table = TableConfig::new(vec![
        ColumnDescriptor::new("username", "Логин", |u: &User| CellValue::text(&u.username))
            .sortable()
            .min_width(140.0),
        ColumnDescriptor::new("full_name", "ФИО", |u: &User| CellValue::opt_text(u.full_name.as_deref()))
            .sortable()
            .min_width(200.0),
        ColumnDescriptor::new("email", "Email", |u: &User| CellValue::opt_text(u.email.as_deref()))
            .sortable(),
        ColumnDescriptor::new("role", "Роль", |u: &User| CellValue::text(u.role_label()))
            .sortable()
            .rule(CellRule::Badge),
        ColumnDescriptor::new("is_active", "Активен", |u: &User| CellValue::Bool(u.is_active))
            .rule(CellRule::Flag),
        ColumnDescriptor::new("tags", "Атрибуты", |u: &User| {
            let summary: Vec<String> = u.tags.iter().map(ToString::to_string).collect();
            CellValue::opt_text(Some(summary.join("; ").as_str()))
        })
        .min_width(220.0),
    ]);
    table.search_fields = vec![
        SearchField::new("username", |u: &User| u.username.clone()),
        SearchField::new("full_name", |u: &User| u.full_name.clone().unwrap_or_default()),
        SearchField::new("email", |u: &User| u.email.clone().unwrap_or_default()),
    ];
    table.selection = true;

    ResourceConfig::new(table, settings)
        .header(HeaderCopy::for_record::<User>().subtitle("Учётные записи и роли"))
        .delete_dialog(DeleteDialogCopy {
            single_template: "Удалить пользователя «{name}»? Вход под этой учётной записью станет невозможен."
                .to_string(),
            bulk_template: "Удалить пользователей ({count})?".to_string(),
            ..Default::default()
        })
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let settings = use_context::<TableSettings>().unwrap_or_default();
    let config = users_config(&settings);
    let store = RwSignal::new(RecordStore::new(seed()));
    let wizard = RwSignal::new(CrudWizard::new(
        config.paging.default_page_size,
        config.bulk_enabled(),
    ));
    let tag_filter = RwSignal::new(TagFilterSet::new());

    let form: FormRenderer<User> = Arc::new(|props: FormProps<User>| {
        view! {
            <UserDetails
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
            icon_name="users"
            toolbar=tag_filter_toolbar(store, wizard, tag_filter)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::{derive_view, TableState};

    #[test]
    fn test_search_includes_optional_fields() {
        let config = users_config(&TableSettings::default());
        let rows = seed();
        let mut state = TableState::new(10);
        state.set_global_filter("PRIYA@");
        assert_eq!(derive_view(&rows, &state, &config.table).visible_ids(), vec![3]);
        state.set_global_filter("иванов");
        assert_eq!(derive_view(&rows, &state, &config.table).visible_ids(), vec![2]);
    }

    #[test]
    fn test_role_and_flag_cells() {
        let config = users_config(&TableSettings::default());
        let rows = seed();
        assert_eq!(config.table.column("role").unwrap().cell_text(&rows[0]), "Администратор");
        assert_eq!(config.table.column("is_active").unwrap().cell_text(&rows[3]), "—");
        assert_eq!(config.table.column("email").unwrap().cell_text(&rows[3]), "—");
        assert!(config.delete_dialog.render_single("admin").contains("«admin»"));
    }
}
