use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи в хранилище
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Дата добавления записи в хранилище
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последнего обновления
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Счётчик изменений, растёт при каждом update
    pub version: i32,
}

impl RecordMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Обновить timestamp и версию
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}

impl Default for RecordMetadata {
    fn default() -> Self {
        Self::new()
    }
}
