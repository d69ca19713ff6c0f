use super::{MasterRecord, RecordId};
use std::marker::PhantomData;
use thiserror::Error;

/// Порядковые номера закончились: следующий не помещается в тип ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Исчерпан диапазон идентификаторов (следующий номер {next})")]
pub struct IdExhausted {
    pub next: u64,
}

/// Генератор идентификаторов записей в рамках сессии
///
/// Счётчик только растёт: удалённые ID повторно не выдаются. Когда номера
/// заканчиваются, `next_id` возвращает ошибку, а не повторяет последний ID.
#[derive(Debug, Clone)]
pub struct IdSequence<Id> {
    next: u64,
    _id: PhantomData<Id>,
}

impl<Id: RecordId> IdSequence<Id> {
    /// Начать с 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.max(1),
            _id: PhantomData,
        }
    }

    /// Продолжить после максимального ID в наборе записей
    pub fn after<T>(rows: &[T]) -> Self
    where
        T: MasterRecord<Id = Id>,
    {
        let max = rows.iter().map(|r| r.id().sequence()).max().unwrap_or(0);
        Self::starting_at(max.saturating_add(1))
    }

    /// Выдать следующий ID
    pub fn next_id(&mut self) -> Result<Id, IdExhausted> {
        let id = Id::from_sequence(self.next).ok_or(IdExhausted { next: self.next })?;
        self.next = self.next.checked_add(1).ok_or(IdExhausted { next: self.next })?;
        Ok(id)
    }
}

impl<Id: RecordId> Default for IdSequence<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq: IdSequence<u32> = IdSequence::new();
        assert_eq!(seq.next_id(), Ok(1));
        assert_eq!(seq.next_id(), Ok(2));
        assert_eq!(seq.next_id(), Ok(3));
    }

    #[test]
    fn test_starting_at_zero_is_bumped() {
        let mut seq: IdSequence<u64> = IdSequence::starting_at(0);
        assert_eq!(seq.next_id(), Ok(1));
    }

    #[test]
    fn test_exhausted_u32_never_repeats_last_id() {
        let last = u64::from(u32::MAX);
        let mut seq: IdSequence<u32> = IdSequence::starting_at(last);
        assert_eq!(seq.next_id(), Ok(u32::MAX));
        assert_eq!(seq.next_id(), Err(IdExhausted { next: last + 1 }));
        assert_eq!(seq.next_id(), Err(IdExhausted { next: last + 1 }));
    }
}
