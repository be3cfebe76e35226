//! JS binding к библиотеке qr-code-styling (глобальный класс QRCodeStyling)

use contracts::render::QrRenderOptions;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Экземпляр рендерера; сам алгоритм построения матрицы — внешний
    #[wasm_bindgen(js_name = QRCodeStyling)]
    pub type QrCode;

    #[wasm_bindgen(constructor, js_class = "QRCodeStyling")]
    fn new_qr(options: &JsValue) -> QrCode;

    /// Встраивает отрисованный QR в контейнер
    #[wasm_bindgen(method, js_class = "QRCodeStyling")]
    pub fn append(this: &QrCode, container: &web_sys::Element);

    #[wasm_bindgen(method, js_class = "QRCodeStyling")]
    fn download(this: &QrCode, options: &JsValue);
}

/// Формат экспорта, который поддерживает рендерер
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

#[derive(Serialize)]
struct DownloadOptions {
    name: &'static str,
    extension: &'static str,
}

/// Создаёт экземпляр рендерера из снимка опций
pub fn create(options: &QrRenderOptions) -> Result<QrCode, String> {
    let js_options = serde_wasm_bindgen::to_value(options)
        .map_err(|e| format!("Ошибка сериализации опций рендерера: {e}"))?;
    Ok(QrCode::new_qr(&js_options))
}

/// Скачивает текущий QR как файл "qrcode.svg" / "qrcode.png"
pub fn export(qr: &QrCode, format: ExportFormat) -> Result<(), String> {
    let js_options = serde_wasm_bindgen::to_value(&DownloadOptions {
        name: "qrcode",
        extension: format.extension(),
    })
    .map_err(|e| format!("Ошибка сериализации опций экспорта: {e}"))?;
    qr.download(&js_options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_extensions() {
        assert_eq!(ExportFormat::Svg.extension(), "svg");
        assert_eq!(ExportFormat::Png.extension(), "png");
    }
}
