//! Цвета формы и оценка контраста по WCAG

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Порог контраста, ниже которого показываем предупреждение
pub const LOW_CONTRAST_THRESHOLD: f64 = 3.0;

/// Цвет в формате "#rrggbb" (ровно 6 hex-символов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };
    pub const WHITE: HexColor = HexColor {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    /// Парсит строку вида "#rrggbb"; регистр не важен
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// CSS-представление, всегда нижний регистр
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Относительная яркость по WCAG: кусочная линеаризация sRGB-каналов
    /// и взвешенная сумма 0.2126·R + 0.7152·G + 0.0722·B
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| D::Error::custom(format!("некорректный hex-цвет: {raw}")))
    }
}

/// Коэффициент контраста WCAG: (L_светлого + 0.05) / (L_тёмного + 0.05)
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Контраст ниже порога — не ошибка, а совет пользователю
pub fn is_low_contrast(a: HexColor, b: HexColor) -> bool {
    contrast_ratio(a, b) < LOW_CONTRAST_THRESHOLD
}
