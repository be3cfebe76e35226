//! Состояние формы генератора и диспетчеризация обновлений

use crate::color::HexColor;
use serde::{Deserialize, Serialize};

/// Границы ползунка размера, px
pub const SIZE_MIN_PX: u32 = 200;
pub const SIZE_MAX_PX: u32 = 1000;
pub const DEFAULT_SIZE_PX: u32 = 400;

/// Стили точек, словарь рендерера qr-code-styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotsStyle {
    Square,
    Dots,
    Rounded,
    Classy,
    ClassyRounded,
    ExtraRounded,
}

impl DotsStyle {
    pub fn code(&self) -> &'static str {
        match self {
            DotsStyle::Square => "square",
            DotsStyle::Dots => "dots",
            DotsStyle::Rounded => "rounded",
            DotsStyle::Classy => "classy",
            DotsStyle::ClassyRounded => "classy-rounded",
            DotsStyle::ExtraRounded => "extra-rounded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "square" => Some(DotsStyle::Square),
            "dots" => Some(DotsStyle::Dots),
            "rounded" => Some(DotsStyle::Rounded),
            "classy" => Some(DotsStyle::Classy),
            "classy-rounded" => Some(DotsStyle::ClassyRounded),
            "extra-rounded" => Some(DotsStyle::ExtraRounded),
            _ => None,
        }
    }

    /// Человекочитаемое название для select и статусных сообщений
    pub fn display_name(&self) -> &'static str {
        match self {
            DotsStyle::Square => "Квадратные",
            DotsStyle::Dots => "Точки",
            DotsStyle::Rounded => "Скруглённые",
            DotsStyle::Classy => "Классические",
            DotsStyle::ClassyRounded => "Классические скруглённые",
            DotsStyle::ExtraRounded => "Сильно скруглённые",
        }
    }

    pub fn all() -> Vec<DotsStyle> {
        vec![
            DotsStyle::Square,
            DotsStyle::Dots,
            DotsStyle::Rounded,
            DotsStyle::Classy,
            DotsStyle::ClassyRounded,
            DotsStyle::ExtraRounded,
        ]
    }
}

/// Стили угловых маркеров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerStyle {
    Square,
    Dot,
    ExtraRounded,
}

impl CornerStyle {
    pub fn code(&self) -> &'static str {
        match self {
            CornerStyle::Square => "square",
            CornerStyle::Dot => "dot",
            CornerStyle::ExtraRounded => "extra-rounded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "square" => Some(CornerStyle::Square),
            "dot" => Some(CornerStyle::Dot),
            "extra-rounded" => Some(CornerStyle::ExtraRounded),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CornerStyle::Square => "Квадратные",
            CornerStyle::Dot => "Точки",
            CornerStyle::ExtraRounded => "Сильно скруглённые",
        }
    }

    pub fn all() -> Vec<CornerStyle> {
        vec![CornerStyle::Square, CornerStyle::Dot, CornerStyle::ExtraRounded]
    }
}

/// Текущие параметры формы. Живёт от старта приложения до закрытия
/// страницы, никуда не сохраняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrFormState {
    pub url: String,
    pub dots_color: HexColor,
    pub background_color: HexColor,
    pub dots_style: DotsStyle,
    pub corners_style: CornerStyle,
    pub size_px: u32,
    /// data-URI логотипа, если загружен
    pub logo_data: Option<String>,
}

impl Default for QrFormState {
    fn default() -> Self {
        Self {
            url: "https://example.com".to_string(),
            dots_color: HexColor::BLACK,
            background_color: HexColor::WHITE,
            dots_style: DotsStyle::Square,
            corners_style: CornerStyle::Square,
            size_px: DEFAULT_SIZE_PX,
            logo_data: None,
        }
    }
}

/// Класс ввода определяет момент перегенерации: selects сразу,
/// непрерывные поля — после паузы ввода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    Immediate,
    Debounced,
}

/// Одно обновление формы, по варианту на поле
#[derive(Debug, Clone, PartialEq)]
pub enum QrFormUpdate {
    Url(String),
    DotsColor(HexColor),
    BackgroundColor(HexColor),
    DotsStyle(DotsStyle),
    CornersStyle(CornerStyle),
    SizePx(u32),
    Logo(Option<String>),
}

impl QrFormUpdate {
    pub fn input_class(&self) -> InputClass {
        match self {
            QrFormUpdate::DotsStyle(_) | QrFormUpdate::CornersStyle(_) | QrFormUpdate::Logo(_) => {
                InputClass::Immediate
            }
            QrFormUpdate::Url(_)
            | QrFormUpdate::DotsColor(_)
            | QrFormUpdate::BackgroundColor(_)
            | QrFormUpdate::SizePx(_) => InputClass::Debounced,
        }
    }
}

impl QrFormState {
    /// Меняет ровно одно поле, без валидации и побочных эффектов.
    /// Размер зажимается в границы ползунка, чтобы инвариант держался
    /// независимо от причуд DOM-ввода.
    pub fn apply(&mut self, update: QrFormUpdate) {
        match update {
            QrFormUpdate::Url(value) => self.url = value,
            QrFormUpdate::DotsColor(value) => self.dots_color = value,
            QrFormUpdate::BackgroundColor(value) => self.background_color = value,
            QrFormUpdate::DotsStyle(value) => self.dots_style = value,
            QrFormUpdate::CornersStyle(value) => self.corners_style = value,
            QrFormUpdate::SizePx(value) => self.size_px = value.clamp(SIZE_MIN_PX, SIZE_MAX_PX),
            QrFormUpdate::Logo(value) => self.logo_data = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_single_field() {
        let mut state = QrFormState::default();
        let before = state.clone();

        state.apply(QrFormUpdate::Url("https://rust-lang.org".to_string()));
        assert_eq!(state.url, "https://rust-lang.org");
        assert_eq!(state.dots_color, before.dots_color);
        assert_eq!(state.size_px, before.size_px);

        state.apply(QrFormUpdate::DotsStyle(DotsStyle::Rounded));
        assert_eq!(state.dots_style, DotsStyle::Rounded);
        assert_eq!(state.corners_style, before.corners_style);
    }

    #[test]
    fn test_size_clamped_to_slider_bounds() {
        let mut state = QrFormState::default();
        state.apply(QrFormUpdate::SizePx(50));
        assert_eq!(state.size_px, SIZE_MIN_PX);
        state.apply(QrFormUpdate::SizePx(5000));
        assert_eq!(state.size_px, SIZE_MAX_PX);
        state.apply(QrFormUpdate::SizePx(640));
        assert_eq!(state.size_px, 640);
    }

    #[test]
    fn test_input_classes() {
        assert_eq!(
            QrFormUpdate::Url(String::new()).input_class(),
            InputClass::Debounced
        );
        assert_eq!(
            QrFormUpdate::DotsColor(HexColor::BLACK).input_class(),
            InputClass::Debounced
        );
        assert_eq!(
            QrFormUpdate::BackgroundColor(HexColor::WHITE).input_class(),
            InputClass::Debounced
        );
        assert_eq!(QrFormUpdate::SizePx(400).input_class(), InputClass::Debounced);
        assert_eq!(
            QrFormUpdate::DotsStyle(DotsStyle::Dots).input_class(),
            InputClass::Immediate
        );
        assert_eq!(
            QrFormUpdate::CornersStyle(CornerStyle::Dot).input_class(),
            InputClass::Immediate
        );
        assert_eq!(QrFormUpdate::Logo(None).input_class(), InputClass::Immediate);
    }

    #[test]
    fn test_remove_never_set_logo_is_noop() {
        let mut state = QrFormState::default();
        let before = state.clone();
        state.apply(QrFormUpdate::Logo(None));
        assert_eq!(state, before);
    }

    #[test]
    fn test_style_codes_roundtrip() {
        for style in DotsStyle::all() {
            assert_eq!(DotsStyle::from_code(style.code()), Some(style));
        }
        for style in CornerStyle::all() {
            assert_eq!(CornerStyle::from_code(style.code()), Some(style));
        }
        assert_eq!(DotsStyle::from_code("hexagon"), None);
    }

    #[test]
    fn test_style_serde_matches_codes() {
        // рендерер получает те же коды, что и select в форме
        let json = serde_json::to_string(&DotsStyle::ClassyRounded).unwrap();
        assert_eq!(json, "\"classy-rounded\"");
        let json = serde_json::to_string(&CornerStyle::ExtraRounded).unwrap();
        assert_eq!(json, "\"extra-rounded\"");
    }
}
