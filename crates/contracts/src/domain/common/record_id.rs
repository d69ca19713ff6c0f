use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей справочников
///
/// Идентификатор: целочисленный порядковый номер, выдаваемый `IdSequence`.
pub trait RecordId:
    Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Ord
    + Serialize
    + DeserializeOwned
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Создать ID из порядкового номера; None, если номер не помещается в тип
    fn from_sequence(n: u64) -> Option<Self>;

    /// Порядковый номер, соответствующий ID
    fn sequence(&self) -> u64;
}

// Реализация для базовых типов

impl RecordId for u32 {
    fn from_sequence(n: u64) -> Option<Self> {
        u32::try_from(n).ok()
    }

    fn sequence(&self) -> u64 {
        u64::from(*self)
    }
}

impl RecordId for u64 {
    fn from_sequence(n: u64) -> Option<Self> {
        Some(n)
    }

    fn sequence(&self) -> u64 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_out_of_range_for_u32() {
        assert_eq!(u32::from_sequence(7), Some(7));
        assert_eq!(u32::from_sequence(u64::from(u32::MAX)), Some(u32::MAX));
        assert_eq!(u32::from_sequence(u64::from(u32::MAX) + 1), None);
        assert_eq!(9u64.sequence(), 9);
    }
}
