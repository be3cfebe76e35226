//! Чтение файла логотипа в data-URI

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use wasm_bindgen_futures::JsFuture;

/// Читает файл и возвращает data-URI для встраивания в QR.
/// Однократный асинхронный результат: либо строка, либо сообщение об ошибке.
pub async fn read_as_data_uri(file: web_sys::File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {e:?}"))?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(format!("data:{};base64,{}", file.type_(), BASE64.encode(bytes)))
}
