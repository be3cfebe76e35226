//! Конфигурация для внешнего рендерера qr-code-styling
//!
//! Поля сериализуются в camelCase ровно в том виде, который ожидает
//! JS-библиотека; frontend передаёт их через serde-wasm-bindgen.

use crate::color::HexColor;
use crate::form::{CornerStyle, DotsStyle, QrFormState};
use serde::Serialize;

/// Отступ вокруг QR-матрицы
pub const QR_MARGIN: u32 = 10;

/// Уровень избыточности QR-кода. С логотипом поднимается до H,
/// чтобы матрица переживала перекрытие картинкой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCorrectionLevel {
    Q,
    H,
}

impl ErrorCorrectionLevel {
    pub fn for_logo(has_logo: bool) -> Self {
        if has_logo {
            ErrorCorrectionLevel::H
        } else {
            ErrorCorrectionLevel::Q
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrOptions {
    pub type_number: u32,
    pub mode: &'static str,
    pub error_correction_level: ErrorCorrectionLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    pub hide_background_dots: bool,
    pub image_size: f64,
    pub margin: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotsOptions {
    pub color: HexColor,
    #[serde(rename = "type")]
    pub style: DotsStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundOptions {
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CornersSquareOptions {
    pub color: HexColor,
    #[serde(rename = "type")]
    pub style: CornerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CornersDotOptions {
    pub color: HexColor,
    #[serde(rename = "type")]
    pub style: CornerStyle,
}

/// Полный объект опций рендерера
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRenderOptions {
    pub width: u32,
    pub height: u32,
    pub data: String,
    pub margin: u32,
    pub qr_options: QrOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub image_options: ImageOptions,
    pub dots_options: DotsOptions,
    pub background_options: BackgroundOptions,
    pub corners_square_options: CornersSquareOptions,
    pub corners_dot_options: CornersDotOptions,
}

impl QrRenderOptions {
    /// Единственный конструктор: снимок опций из текущего состояния формы
    pub fn from_state(state: &QrFormState) -> Self {
        let has_logo = state.logo_data.is_some();

        let image_options = if has_logo {
            ImageOptions {
                hide_background_dots: true,
                image_size: 0.4,
                margin: 5,
                cross_origin: Some("anonymous"),
            }
        } else {
            ImageOptions {
                hide_background_dots: true,
                image_size: 0.4,
                margin: 0,
                cross_origin: None,
            }
        };

        Self {
            width: state.size_px,
            height: state.size_px,
            data: state.url.clone(),
            margin: QR_MARGIN,
            qr_options: QrOptions {
                type_number: 0,
                mode: "Byte",
                error_correction_level: ErrorCorrectionLevel::for_logo(has_logo),
            },
            image: state.logo_data.clone(),
            image_options,
            dots_options: DotsOptions {
                color: state.dots_color,
                style: state.dots_style,
            },
            background_options: BackgroundOptions {
                color: state.background_color,
            },
            corners_square_options: CornersSquareOptions {
                color: state.dots_color,
                style: state.corners_style,
            },
            // угловая точка всегда рисуется кружком в цвете точек
            corners_dot_options: CornersDotOptions {
                color: state.dots_color,
                style: CornerStyle::Dot,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::QrFormUpdate;

    #[test]
    fn test_options_without_logo() {
        let state = QrFormState::default();
        let options = QrRenderOptions::from_state(&state);

        assert_eq!(options.width, state.size_px);
        assert_eq!(options.height, state.size_px);
        assert_eq!(options.data, "https://example.com");
        assert_eq!(options.margin, QR_MARGIN);
        assert_eq!(
            options.qr_options.error_correction_level,
            ErrorCorrectionLevel::Q
        );
        assert_eq!(options.image, None);
        assert_eq!(options.image_options.margin, 0);
        assert_eq!(options.image_options.cross_origin, None);
        assert_eq!(options.corners_dot_options.style, CornerStyle::Dot);
    }

    #[test]
    fn test_logo_escalates_error_correction() {
        let mut state = QrFormState::default();
        state.apply(QrFormUpdate::Logo(Some("data:image/png;base64,AAAA".to_string())));

        let options = QrRenderOptions::from_state(&state);
        assert_eq!(
            options.qr_options.error_correction_level,
            ErrorCorrectionLevel::H
        );
        assert_eq!(options.image.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(options.image_options.margin, 5);
        assert_eq!(options.image_options.cross_origin, Some("anonymous"));
        assert!(options.image_options.hide_background_dots);
    }

    #[test]
    fn test_removed_logo_reverts_to_q() {
        let mut state = QrFormState::default();
        state.apply(QrFormUpdate::Logo(Some("data:image/png;base64,AAAA".to_string())));
        state.apply(QrFormUpdate::Logo(None));

        let options = QrRenderOptions::from_state(&state);
        assert_eq!(
            options.qr_options.error_correction_level,
            ErrorCorrectionLevel::Q
        );
        assert_eq!(options.image, None);
    }

    #[test]
    fn test_serialized_shape_matches_renderer_contract() {
        let state = QrFormState::default();
        let value = serde_json::to_value(QrRenderOptions::from_state(&state)).unwrap();

        assert_eq!(value["qrOptions"]["typeNumber"], 0);
        assert_eq!(value["qrOptions"]["mode"], "Byte");
        assert_eq!(value["qrOptions"]["errorCorrectionLevel"], "Q");
        assert_eq!(value["dotsOptions"]["type"], "square");
        assert_eq!(value["dotsOptions"]["color"], "#000000");
        assert_eq!(value["backgroundOptions"]["color"], "#ffffff");
        assert_eq!(value["cornersSquareOptions"]["type"], "square");
        assert_eq!(value["cornersDotOptions"]["type"], "dot");
        assert_eq!(value["imageOptions"]["hideBackgroundDots"], true);
        assert_eq!(value["imageOptions"]["imageSize"], 0.4);
        // без логотипа ключа image быть не должно
        assert!(value.get("image").is_none());
        assert!(value["imageOptions"].get("crossOrigin").is_none());
    }
}
