use chrono::{NaiveDate, Utc};
use contracts::domain::a004_discount::aggregate::Discount;
use leptos::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Черновик формы скидки: число и даты вводятся как текст
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDraft {
    pub record: Discount,
    pub percent: String,
    pub valid_from: String,
    pub valid_until: String,
}

impl DiscountDraft {
    pub fn from_record(record: Discount) -> Self {
        Self {
            percent: record.percent.to_string(),
            valid_from: record.valid_from.format(DATE_FORMAT).to_string(),
            valid_until: record
                .valid_until
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            record,
        }
    }

    /// Новая скидка действует с сегодняшнего дня
    pub fn new_starting(today: NaiveDate) -> Self {
        Self::from_record(Discount {
            valid_from: today,
            ..Default::default()
        })
    }

    pub fn to_record(&self) -> Result<Discount, String> {
        let percent = self
            .percent
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| format!("Процент должен быть числом: «{}»", self.percent.trim()))?;
        let valid_from = parse_date(&self.valid_from)?
            .ok_or_else(|| "Дата начала обязательна".to_string())?;
        let valid_until = parse_date(&self.valid_until)?;

        let mut record = self.record.clone();
        record.percent = percent;
        record.valid_from = valid_from;
        record.valid_until = valid_until;
        record.validate()?;
        Ok(record)
    }
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("Некорректная дата: «{}»", raw))
}

#[derive(Clone, Copy)]
pub struct DiscountDetailsViewModel {
    pub form: RwSignal<DiscountDraft>,
    pub error: RwSignal<Option<String>>,
}

impl DiscountDetailsViewModel {
    pub fn new(initial: Option<Discount>) -> Self {
        let draft = match initial {
            Some(record) => DiscountDraft::from_record(record),
            None => DiscountDraft::new_starting(Utc::now().date_naive()),
        };
        Self {
            form: RwSignal::new(draft),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, on_submit: Callback<Discount>) {
        match self.form.with_untracked(DiscountDraft::to_record) {
            Ok(record) => {
                self.error.set(None);
                on_submit.run(record);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draft_roundtrip_fields() {
        let draft = DiscountDraft::from_record(Discount {
            id: 3,
            name: "Чёрная пятница".into(),
            percent: 30.0,
            valid_from: date(2025, 11, 28),
            valid_until: Some(date(2025, 11, 30)),
            is_active: true,
        });
        assert_eq!(draft.valid_from, "2025-11-28");
        assert_eq!(draft.valid_until, "2025-11-30");
        assert_eq!(draft.to_record().unwrap().valid_until, Some(date(2025, 11, 30)));
    }

    #[test]
    fn test_draft_parsing_errors() {
        let mut draft = DiscountDraft::new_starting(date(2026, 1, 1));
        draft.record.name = "Весенняя".into();
        draft.percent = "12,5".into();
        assert_eq!(draft.to_record().unwrap().percent, 12.5);

        draft.percent = "много".into();
        assert!(draft.to_record().unwrap_err().contains("много"));

        draft.percent = "150".into();
        assert!(draft.to_record().is_err());

        draft.percent = "10".into();
        draft.valid_until = "2025-12-31".into();
        assert_eq!(
            draft.to_record().unwrap_err(),
            "Дата окончания раньше даты начала"
        );

        draft.valid_until = "31.12.2026".into();
        assert!(draft.to_record().unwrap_err().starts_with("Некорректная дата"));
    }
}
