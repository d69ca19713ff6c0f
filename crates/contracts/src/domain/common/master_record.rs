use super::RecordId;

/// Трейт для записи справочника (master data)
///
/// Общий контракт для всех строк, которые показываются в универсальной
/// таблице: стабильный идентификатор и отображаемое имя для диалогов.
pub trait MasterRecord: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Тип идентификатора записи
    type Id: RecordId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Установить ID записи (используется хранилищем при создании)
    fn set_id(&mut self, id: Self::Id);

    /// Отображаемое имя записи (в диалоге удаления и заголовке формы)
    fn display_name(&self) -> &str;

    // ============================================================================
    // Метаданные справочника
    // ============================================================================

    /// Индекс справочника в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "brand")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;
}
