use super::view_model::AlarmDetailsViewModel;
use crate::shared::components::form_fields::{FormActions, FormError, SelectField, TextField};
use crate::shared::components::tag_editor::TagEditor;
use contracts::domain::a005_alarm::aggregate::{Alarm, Severity};
use leptos::prelude::*;

pub fn severity_caption(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Низкая",
        Severity::Medium => "Средняя",
        Severity::High => "Высокая",
        Severity::Critical => "Критическая",
    }
}

#[component]
pub fn AlarmDetails(
    initial: Option<Alarm>,
    on_submit: Callback<Alarm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AlarmDetailsViewModel::new(initial);
    let form = vm.form;

    let severity_options: Vec<(String, String)> = Severity::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), severity_caption(s).to_string()))
        .collect();

    let last_triggered = form.with_untracked(|d| d.record.last_triggered_at).map(|at| {
        view! {
            <div class="form__hint">
                {format!("Последнее срабатывание: {}", at.format("%d.%m.%Y %H:%M"))}
            </div>
        }
    });

    view! {
        <div class="details-form">
            <TextField
                label="Название"
                required=true
                value=Signal::derive(move || form.with(|d| d.record.title.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.record.title = v))
            />
            <SelectField
                label="Важность"
                value=Signal::derive(move || form.with(|d| d.record.severity.as_str().to_string()))
                options=severity_options
                on_change=Callback::new(move |v: String| {
                    if let Some(severity) = Severity::from_str_opt(&v) {
                        form.update(|d| d.record.severity = severity);
                    }
                })
            />
            <TextField
                label="Порог"
                value=Signal::derive(move || form.with(|d| d.threshold.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.threshold = v))
            />
            {last_triggered}
            <TagEditor
                tags=Signal::derive(move || form.with(|d| d.record.tags.clone()))
                on_change=Callback::new(move |tags| form.update(|d| d.record.tags = tags))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
