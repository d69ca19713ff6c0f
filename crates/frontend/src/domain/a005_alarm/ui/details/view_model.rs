use contracts::domain::a005_alarm::aggregate::Alarm;
use leptos::prelude::*;

/// Черновик формы оповещения: порог вводится как текст
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlarmDraft {
    pub record: Alarm,
    pub threshold: String,
}

impl AlarmDraft {
    pub fn from_record(record: Alarm) -> Self {
        let threshold = record.threshold.to_string();
        Self { record, threshold }
    }

    pub fn to_record(&self) -> Result<Alarm, String> {
        let threshold = self
            .threshold
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| format!("Порог должен быть числом: «{}»", self.threshold.trim()))?;
        let mut record = self.record.clone();
        record.threshold = threshold;
        record.validate()?;
        Ok(record)
    }
}

#[derive(Clone, Copy)]
pub struct AlarmDetailsViewModel {
    pub form: RwSignal<AlarmDraft>,
    pub error: RwSignal<Option<String>>,
}

impl AlarmDetailsViewModel {
    pub fn new(initial: Option<Alarm>) -> Self {
        Self {
            form: RwSignal::new(AlarmDraft::from_record(initial.unwrap_or_default())),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, on_submit: Callback<Alarm>) {
        match self.form.with_untracked(AlarmDraft::to_record) {
            Ok(record) => {
                self.error.set(None);
                on_submit.run(record);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
