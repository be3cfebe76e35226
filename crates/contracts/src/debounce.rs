//! Коалесценция перегенераций при быстром вводе
//!
//! Вместо «сырого» идентификатора таймера — счётчик поколений:
//! каждое планирование отменяет все предыдущие, выстрелить может
//! только последнее. Сам таймер живёт во frontend и здесь не нужен.

use std::sync::atomic::{AtomicU64, Ordering};

/// Пауза ввода перед перегенерацией, мс
pub const DEBOUNCE_MS: u32 = 300;

/// Одноразовый шлюз отложенной перегенерации.
/// Единственный допустимый переход — отменить и перепланировать.
#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: AtomicU64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Планирует новый запуск и возвращает его поколение.
    /// Все ранее выданные поколения при этом устаревают.
    pub fn schedule(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Отменяет все отложенные запуски (путь немедленной генерации)
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// true только если поколение всё ещё актуально
    pub fn try_fire(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == generation
    }
}
