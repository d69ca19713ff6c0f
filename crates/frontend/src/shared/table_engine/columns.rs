//! Описание колонок таблицы и неявные служебные колонки
//!
//! Колонки задаёт адаптер справочника. Движок добавляет к ним колонку выбора
//! и колонку порядкового номера через `compose_columns`, не изменяя исходный
//! список.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt;

/// Значение ячейки, которое возвращает accessor колонки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn opt_text(s: Option<&str>) -> Self {
        match s {
            Some(v) if !v.is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Decimal(_) => 2,
            CellValue::Date(_) | CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Total order used by sorting; empty values sort first
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Decimal(a), Decimal(b)) => a.total_cmp(b),
            (Integer(a), Decimal(b)) => (*a as f64).total_cmp(b),
            (Decimal(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Date(a), DateTime(b)) => a.and_hms_opt(0, 0, 0).map_or(Ordering::Less, |a| a.cmp(b)),
            (DateTime(a), Date(b)) => b
                .and_hms_opt(0, 0, 0)
                .map_or(Ordering::Greater, |b| a.cmp(&b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Decimal(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "Да" } else { "Нет" }),
            CellValue::Date(d) => write!(f, "{}", d.format("%d.%m.%Y")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%d.%m.%Y %H:%M")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Decimal(n)
    }
}

/// Правило отображения ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellRule {
    #[default]
    Plain,
    /// Число с фиксированным количеством знаков
    Number { decimals: usize },
    Percent,
    /// "✓" / "—" вместо Да/Нет
    Flag,
    /// Значение в плашке (статусы, уровни важности)
    Badge,
}

impl CellRule {
    pub fn render(&self, value: &CellValue) -> String {
        match (self, value) {
            (_, CellValue::Empty) => "—".to_string(),
            (CellRule::Number { decimals }, CellValue::Decimal(n)) => {
                format!("{:.*}", *decimals, n)
            }
            (CellRule::Number { decimals }, CellValue::Integer(n)) => {
                format!("{:.*}", *decimals, *n as f64)
            }
            (CellRule::Percent, CellValue::Decimal(n)) => format!("{}%", n),
            (CellRule::Percent, CellValue::Integer(n)) => format!("{}%", n),
            (CellRule::Flag, CellValue::Bool(b)) => if *b { "✓" } else { "—" }.to_string(),
            _ => value.to_string(),
        }
    }

    pub fn align_right(&self) -> bool {
        matches!(self, CellRule::Number { .. } | CellRule::Percent)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CellRule::Badge => "table__cell table__cell--badge",
            CellRule::Flag => "table__cell table__cell--center",
            r if r.align_right() => "table__cell table__cell--right",
            _ => "table__cell",
        }
    }
}

/// Описание колонки, которое поставляет адаптер справочника
pub struct ColumnDescriptor<T> {
    pub key: &'static str,
    pub title: &'static str,
    /// Accessor или составной рендер (значение из нескольких полей)
    pub accessor: fn(&T) -> CellValue,
    pub sortable: bool,
    pub rule: CellRule,
    pub min_width: f64,
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDescriptor<T> {}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("rule", &self.rule)
            .finish()
    }
}

impl<T> ColumnDescriptor<T> {
    pub fn new(key: &'static str, title: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            key,
            title,
            accessor,
            sortable: false,
            rule: CellRule::Plain,
            min_width: 100.0,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn rule(mut self, rule: CellRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn cell_text(&self, row: &T) -> String {
        self.rule.render(&self.value(row))
    }
}

/// Поле глобального поиска
pub struct SearchField<T> {
    pub key: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Clone for SearchField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SearchField<T> {}

impl<T> SearchField<T> {
    pub fn new(key: &'static str, value: fn(&T) -> String) -> Self {
        Self { key, value }
    }
}

/// Колонка итоговой таблицы
#[derive(Debug)]
pub enum TableColumn<'a, T> {
    /// Чекбокс выбора строки
    Selection,
    /// Сквозной номер строки
    RowNumber,
    Data(&'a ColumnDescriptor<T>),
}

impl<T> Clone for TableColumn<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableColumn<'_, T> {}

impl<T> TableColumn<'_, T> {
    pub fn key(&self) -> &'static str {
        match self {
            TableColumn::Selection => "__select",
            TableColumn::RowNumber => "__row_number",
            TableColumn::Data(c) => c.key,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TableColumn::Selection => "",
            TableColumn::RowNumber => "№",
            TableColumn::Data(c) => c.title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOptions {
    pub selection: bool,
    pub row_numbers: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            selection: false,
            row_numbers: true,
        }
    }
}

/// Итоговый набор колонок: [выбор?] [№?] колонки адаптера
pub fn compose_columns<'a, T>(
    user_columns: &'a [ColumnDescriptor<T>],
    options: ColumnOptions,
) -> Vec<TableColumn<'a, T>> {
    let mut columns = Vec::with_capacity(user_columns.len() + 2);
    if options.selection {
        columns.push(TableColumn::Selection);
    }
    if options.row_numbers {
        columns.push(TableColumn::RowNumber);
    }
    columns.extend(user_columns.iter().map(TableColumn::Data));
    columns
}

/// Сквозной номер строки (с 1) с учётом страницы
pub fn row_number(page_index: usize, page_size: usize, position: usize) -> usize {
    page_index * page_size.max(1) + position + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        price: f64,
    }

    fn columns() -> Vec<ColumnDescriptor<Item>> {
        vec![
            ColumnDescriptor::new("name", "Name", |i: &Item| i.name.as_str().into()).sortable(),
            ColumnDescriptor::new("price", "Price", |i: &Item| i.price.into())
                .rule(CellRule::Number { decimals: 2 }),
        ]
    }

    #[test]
    fn test_compose_columns_does_not_touch_input() {
        let user = columns();
        let composed = compose_columns(
            &user,
            ColumnOptions {
                selection: true,
                row_numbers: true,
            },
        );
        let keys: Vec<&str> = composed.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["__select", "__row_number", "name", "price"]);
        assert_eq!(user.len(), 2);
        assert_eq!(user[0].key, "name");

        let plain = compose_columns(&user, ColumnOptions::default());
        let keys: Vec<&str> = plain.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["__row_number", "name", "price"]);
    }

    #[test]
    fn test_cell_rules() {
        let cols = columns();
        let item = Item {
            name: "Drill".into(),
            price: 12.5,
        };
        assert_eq!(cols[1].cell_text(&item), "12.50");
        assert_eq!(CellRule::Percent.render(&CellValue::Decimal(12.5)), "12.5%");
        assert_eq!(CellRule::Flag.render(&CellValue::Bool(true)), "✓");
        assert_eq!(CellRule::Plain.render(&CellValue::Empty), "—");
        assert_eq!(CellRule::Plain.render(&CellValue::Bool(false)), "Нет");
        assert!(CellRule::Number { decimals: 0 }.align_right());
    }

    #[test]
    fn test_compare_orders_empty_first_and_ignores_case() {
        assert_eq!(
            CellValue::text("apple").compare(&CellValue::text("Banana")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Empty.compare(&CellValue::text("a")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Integer(3).compare(&CellValue::Decimal(2.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_row_number_spans_pages() {
        assert_eq!(row_number(0, 10, 0), 1);
        assert_eq!(row_number(2, 10, 4), 25);
    }
}
