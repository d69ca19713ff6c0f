use anyhow::Context;
use serde::de::DeserializeOwned;

/// Разобрать встроенный JSON-набор начальных данных справочника
pub fn parse_fixture<T: DeserializeOwned>(name: &str, json: &str) -> anyhow::Result<Vec<T>> {
    serde_json::from_str(json).with_context(|| format!("parsing fixture {}", name))
}

/// Начальные данные или пустой список с записью в лог
pub fn load_or_empty<T: DeserializeOwned>(name: &str, json: &str) -> Vec<T> {
    match parse_fixture(name, json) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("{:#}", e);
            Vec::new()
        }
    }
}
