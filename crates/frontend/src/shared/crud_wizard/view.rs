//! Экран справочника: заголовок, таблица, форма и подтверждение удаления
//!
//! Состояние экрана живёт в `RwSignal<CrudWizard<T>>`, который создаёт
//! адаптер справочника. Сохранение и удаление выполняют callback адаптера;
//! они вызываются вне `update` автомата, поэтому могут сами менять его.

use super::config::ResourceConfig;
use super::machine::{
    CrudWizard, DeleteRequest, DeleteTarget, FormMode, FormSubmission, WizardError, WizardPhase,
};
use crate::shared::components::delete_dialog::DeleteDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::table_engine::{
    compose_columns, derive_view, toggle_page_selection, CellRule, ColumnOptions,
    HeaderCheckState, TableColumn,
};
use contracts::domain::common::MasterRecord;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Что получает компонент формы справочника
pub struct FormProps<T: MasterRecord> {
    pub mode: FormMode,
    /// Значения строки при редактировании; None при создании
    pub initial: Option<T>,
    pub on_submit: Callback<T>,
    pub on_cancel: Callback<()>,
}

pub type FormRenderer<T> = Arc<dyn Fn(FormProps<T>) -> AnyView + Send + Sync>;

/// Видимая страница без заимствований, пригодная для рендера
#[derive(Clone)]
struct PageSnapshot<T> {
    rows: Vec<(usize, T, bool)>,
    page_count: usize,
    total_filtered: usize,
    show_pagination: bool,
    header_check: HeaderCheckState,
}

#[component]
#[allow(non_snake_case)]
pub fn CrudWizardPage<T>(
    config: ResourceConfig<T>,
    /// Строки справочника (уже после фильтра по атрибутам, если он есть)
    #[prop(into)]
    rows: Signal<Vec<T>>,
    wizard: RwSignal<CrudWizard<T>>,
    form: FormRenderer<T>,
    on_submit: Callback<FormSubmission<T>>,
    on_delete: Callback<DeleteRequest<T::Id>>,
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Дополнительная панель над таблицей (например, фильтр по атрибутам)
    #[prop(optional)]
    toolbar: Option<ChildrenFn>,
) -> impl IntoView
where
    T: MasterRecord,
{
    let header = config.header.clone();
    let columns = config.table.columns.clone();
    let options = ColumnOptions {
        selection: config.table.selection,
        row_numbers: true,
    };
    let sorting = config.table.sorting;
    let searchable = !config.table.search_fields.is_empty();
    let paging = config.paging.clone();
    let config = StoredValue::new(config);
    let notice = RwSignal::new(None::<String>);

    let report = move |result: Result<(), WizardError>| {
        if let Err(e) = result {
            log::warn!("{}: {}", T::collection_name(), e);
            notice.set(Some(e.to_string()));
        }
    };

    let snapshot = Signal::derive(move || {
        rows.with(|rows| {
            wizard.with(|w| {
                config.with_value(|c| {
                    let view = derive_view(rows, w.table(), &c.table);
                    PageSnapshot {
                        rows: view
                            .rows
                            .iter()
                            .map(|r| (r.row_number, r.row.clone(), r.selected))
                            .collect(),
                        page_count: view.page_count,
                        total_filtered: view.total_filtered,
                        show_pagination: view.show_pagination,
                        header_check: view.header_check,
                    }
                })
            })
        })
    });

    // ------------------------------------------------------------------------
    // Действия
    // ------------------------------------------------------------------------

    let open_create = move || {
        notice.set(None);
        report(wizard.try_update(|w| w.open_create()).unwrap_or(Ok(())));
    };

    let open_edit = move |row: T| {
        notice.set(None);
        report(wizard.try_update(|w| w.open_edit(&row)).unwrap_or(Ok(())));
    };

    let request_delete = move |row: T| {
        notice.set(None);
        report(wizard.try_update(|w| w.request_delete(&row)).unwrap_or(Ok(())));
    };

    let request_bulk_delete = move || {
        notice.set(None);
        report(wizard.try_update(|w| w.request_bulk_delete()).unwrap_or(Ok(())));
    };

    let submit = Callback::new(move |values: T| {
        let mut submission = None;
        let result = wizard
            .try_update(|w| w.submit_form(values, |s| submission = Some(s)))
            .unwrap_or(Ok(()));
        report(result);
        if let Some(submission) = submission {
            on_submit.run(submission);
        }
    });

    let cancel_form = Callback::new(move |_| wizard.update(|w| w.cancel_form()));

    let confirm_delete = Callback::new(move |_| {
        let mut request = None;
        let result = wizard
            .try_update(|w| w.confirm_delete(|r| request = Some(r)))
            .unwrap_or(Ok(()));
        report(result);
        if let Some(request) = request {
            on_delete.run(request);
            rows.with_untracked(|rows| {
                config.with_value(|c| wizard.update(|w| w.rows_removed(rows, &c.table)))
            });
        }
    });

    let cancel_delete = Callback::new(move |_| wizard.update(|w| w.cancel_delete()));

    let toggle_page = move || {
        rows.with_untracked(|rows| {
            config.with_value(|c| {
                wizard.update(|w| toggle_page_selection(rows, w.table_mut(), &c.table))
            })
        })
    };

    // ------------------------------------------------------------------------
    // Форма и подтверждение удаления
    // ------------------------------------------------------------------------

    // Ключ открытой формы: форма пересоздаётся только при его смене
    let form_key = Memo::new(move |_| {
        wizard.with(|w| {
            let request = w.form_request();
            request
                .open
                .then(|| (request.mode, request.initial_values.map(MasterRecord::id)))
        })
    });

    let form_view = move || {
        form_key.get().map(|(mode, _)| {
            let initial = wizard.with_untracked(|w| w.form_request().initial_values.cloned());
            let title = match (&mode, &initial) {
                (FormMode::Edit, Some(row)) => format!("{}: {}", T::element_name(), row.display_name()),
                _ => format!("{} (создание)", T::element_name()),
            };
            let props = FormProps {
                mode,
                initial,
                on_submit: submit,
                on_cancel: cancel_form,
            };
            let form = form.clone();
            view! {
                <ModalFrame title=title on_close=cancel_form modal_class="modal--form">
                    {form(props)}
                </ModalFrame>
            }
        })
    };

    let delete_message = Memo::new(move |_| {
        wizard.with(|w| match w.phase() {
            WizardPhase::DeleteConfirm(DeleteTarget::Single(row)) => {
                Some(config.with_value(|c| c.delete_dialog.render_single(row.display_name())))
            }
            WizardPhase::DeleteConfirm(DeleteTarget::Bulk(ids)) => {
                Some(config.with_value(|c| c.delete_dialog.render_bulk(ids.len())))
            }
            _ => None,
        })
    });

    let delete_view = move || {
        delete_message.get().map(|message| {
            let (title, confirm_label) = config.with_value(|c| {
                (c.delete_dialog.title.clone(), c.delete_dialog.confirm_label.clone())
            });
            view! {
                <DeleteDialog
                    title=title
                    message=message
                    confirm_label=confirm_label
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            }
        })
    };

    // ------------------------------------------------------------------------
    // Таблица
    // ------------------------------------------------------------------------

    let header_cells = compose_columns(&columns, options)
        .into_iter()
        .map(|column| match column {
            TableColumn::Selection => view! {
                <TableHeaderCheckbox
                    state=Signal::derive(move || snapshot.with(|s| s.header_check))
                    on_toggle=Callback::new(move |_| toggle_page())
                />
            }
            .into_any(),
            TableColumn::RowNumber => {
                let title = column.title();
                view! {
                    <TableHeaderCell resizable=false class="fixed-number-column">{title}</TableHeaderCell>
                }
                .into_any()
            }
            TableColumn::Data(c) if sorting && c.sortable => {
                let key = c.key;
                let align = if c.rule.align_right() { "right" } else { "left" };
                view! {
                    <SortableHeaderCell
                        label=c.title
                        direction=Signal::derive(move || {
                            wizard.with(|w| w.table().sort_direction_for(key))
                        })
                        on_sort=Callback::new(move |_| {
                            wizard.update(|w| w.table_mut().toggle_sort(key))
                        })
                        min_width=c.min_width
                        align=align
                    />
                }
                .into_any()
            }
            TableColumn::Data(c) => {
                let title = c.title;
                view! {
                    <TableHeaderCell resizable=true min_width=c.min_width>{title}</TableHeaderCell>
                }
                .into_any()
            }
        })
        .collect_view();

    let column_count = compose_columns(&columns, options).len() + 1;

    let body_rows = move || {
        let snap = snapshot.get();
        if snap.rows.is_empty() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string() class="table__cell--empty">
                        "Нет данных"
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }
        snap.rows
            .into_iter()
            .map(|(number, row, selected)| {
                let id = row.id();
                let cells = compose_columns(&columns, options)
                    .into_iter()
                    .map(|column| match column {
                        TableColumn::Selection => view! {
                            <TableCellCheckbox
                                checked=Signal::derive(move || {
                                    wizard.with(|w| w.table().is_selected(&id))
                                })
                                on_change=Callback::new(move |checked| {
                                    wizard.update(|w| w.table_mut().set_row_selected(id, checked))
                                })
                            />
                        }
                        .into_any(),
                        TableColumn::RowNumber => view! {
                            <TableCell class="fixed-number-column">{number}</TableCell>
                        }
                        .into_any(),
                        TableColumn::Data(c) => {
                            let text = c.cell_text(&row);
                            let class = c.rule.css_class();
                            if c.rule == CellRule::Badge {
                                view! {
                                    <TableCell class=class>
                                        <span class="badge">{text}</span>
                                    </TableCell>
                                }
                                .into_any()
                            } else {
                                view! { <TableCell class=class>{text}</TableCell> }.into_any()
                            }
                        }
                    })
                    .collect_view();
                let row_for_edit = row.clone();
                let row_for_delete = row.clone();
                view! {
                    <TableRow class=if selected { "table__row--selected" } else { "" }>
                        {cells}
                        <TableCell class="table__cell--actions">
                            <button
                                class="button button--icon"
                                title="Изменить"
                                on:click=move |_| open_edit(row_for_edit.clone())
                            >
                                {icon("edit")}
                            </button>
                            <button
                                class="button button--icon"
                                title="Удалить"
                                on:click=move |_| request_delete(row_for_delete.clone())
                            >
                                {icon("trash")}
                            </button>
                        </TableCell>
                    </TableRow>
                }
                .into_any()
            })
            .collect_view()
            .into_any()
    };

    let selected_count = Signal::derive(move || wizard.with(|w| w.table().selected_count()));

    view! {
        <div class="page">
            <PageHeader title=header.title subtitle=header.subtitle icon_name=icon_name.unwrap_or("item")>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    {header.add_label}
                </Button>
                {options.selection.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| request_bulk_delete()
                        disabled=Signal::derive(move || selected_count.get() == 0)
                    >
                        {icon("trash")}
                        {move || format!("Удалить выбранные ({})", selected_count.get())}
                    </Button>
                })}
            </PageHeader>

            {move || notice.get().map(|message| view! {
                <div class="warning-box" on:click=move |_| notice.set(None)>
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            })}

            {toolbar.map(|toolbar| toolbar())}

            {searchable.then(|| view! {
                <div class="table-search">
                    <input
                        class="form__input"
                        type="search"
                        placeholder="Поиск"
                        prop:value=move || wizard.with(|w| w.table().global_filter.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            wizard.update(|w| w.table_mut().set_global_filter(text));
                        }
                    />
                </div>
            })}

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            <TableHeaderCell resizable=false class="table__cell--actions">""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body_rows}</TableBody>
                </Table>
            </div>

            {move || snapshot.with(|s| s.show_pagination).then(|| {
                view! {
                    <PaginationControls
                        current_page=Signal::derive(move || wizard.with(|w| w.table().page_index))
                        total_pages=Signal::derive(move || snapshot.with(|s| s.page_count))
                        total_count=Signal::derive(move || snapshot.with(|s| s.total_filtered))
                        page_size=Signal::derive(move || wizard.with(|w| w.table().page_size))
                        on_page_change=Callback::new(move |page| {
                            wizard.update(|w| w.table_mut().set_page(page))
                        })
                        on_page_size_change=Callback::new(move |size| {
                            wizard.update(|w| w.table_mut().set_page_size(size))
                        })
                        page_size_options=paging.page_sizes.clone()
                        visible_pages=paging.visible_pages
                    />
                }
            })}

            {form_view}
            {delete_view}
        </div>
    }
}
