//! ViewModel студии: состояние формы, дебаунс и вызовы рендерера

use contracts::color::is_low_contrast;
use contracts::debounce::{DebounceGate, DEBOUNCE_MS};
use contracts::form::{InputClass, QrFormState, QrFormUpdate};
use contracts::render::QrRenderOptions;
use contracts::validation::{check_url, validate_logo, UrlStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::logo;
use super::renderer::{self, ExportFormat, QrCode};

/// id контейнера, в который рендерер встраивает canvas/svg
const QR_CONTAINER_ID: &str = "qrcode";

/// ViewModel формы генератора. Копируемый набор сигналов, как и
/// остальные view-model в приложении; владеет единственным экземпляром
/// состояния и шлюзом отложенной перегенерации.
#[derive(Clone, Copy)]
pub struct QrStudioVm {
    pub form: RwSignal<QrFormState>,
    pub url_status: RwSignal<UrlStatus>,
    pub low_contrast: RwSignal<bool>,
    /// Текст для aria-live региона
    pub status: RwSignal<String>,
    /// Открывает кнопки скачивания после первой успешной генерации
    pub has_rendered: RwSignal<bool>,
    pub logo_error: RwSignal<Option<String>>,
    gate: StoredValue<DebounceGate>,
    qr: StoredValue<Option<QrCode>, LocalStorage>,
}

impl QrStudioVm {
    pub fn new() -> Self {
        let state = QrFormState::default();
        Self {
            url_status: RwSignal::new(check_url(&state.url)),
            low_contrast: RwSignal::new(is_low_contrast(state.dots_color, state.background_color)),
            form: RwSignal::new(state),
            status: RwSignal::new(String::new()),
            has_rendered: RwSignal::new(false),
            logo_error: RwSignal::new(None),
            gate: StoredValue::new(DebounceGate::new()),
            qr: StoredValue::new_local(None),
        }
    }

    /// Применяет одно обновление формы и решает, когда перегенерировать:
    /// selects — сразу (отменяя отложенный запуск), непрерывный ввод —
    /// после паузы, из пачки выживает только последний запуск.
    pub fn dispatch(&self, update: QrFormUpdate) {
        let class = update.input_class();
        self.form.update(|form| form.apply(update));

        let form = self.form.get_untracked();
        self.url_status.set(check_url(&form.url));
        self.low_contrast
            .set(is_low_contrast(form.dots_color, form.background_color));

        match class {
            InputClass::Immediate => {
                self.gate.with_value(|gate| gate.cancel());
                self.render();
            }
            InputClass::Debounced => {
                let generation = self.gate.with_value(|gate| gate.schedule());
                let vm = *self;
                leptos::task::spawn_local(async move {
                    TimeoutFuture::new(DEBOUNCE_MS).await;
                    if vm.gate.with_value(|gate| gate.try_fire(generation)) {
                        vm.render();
                    }
                });
            }
        }
    }

    /// Генерация: валидирует URL, чистит контейнер, строит опции и
    /// подключает рендерер. При невалидном URL прежний вывод не трогаем.
    pub fn render(&self) {
        let form = self.form.get_untracked();

        let status = check_url(&form.url);
        self.url_status.set(status);
        if !status.is_renderable() {
            log::debug!("генерация пропущена: URL пустой или некорректный");
            return;
        }

        let Some(container) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(QR_CONTAINER_ID))
        else {
            log::warn!("контейнер #{QR_CONTAINER_ID} не найден");
            return;
        };
        container.set_inner_html("");

        let options = QrRenderOptions::from_state(&form);
        match renderer::create(&options) {
            Ok(qr) => {
                qr.append(&container);
                self.qr.set_value(Some(qr));
                self.has_rendered.set(true);
                self.low_contrast
                    .set(is_low_contrast(form.dots_color, form.background_color));
                self.status
                    .set(status_message(form.size_px, form.dots_style.display_name()));
            }
            Err(e) => log::warn!("рендерер не создан: {e}"),
        }
    }

    /// Загрузка логотипа: проверка типа и размера до какого-либо изменения
    /// состояния; при отказе — alert и сброс input. Чтение файла не
    /// дебаунсится и не отменяется дискретными изменениями формы.
    pub fn upload_logo(&self, input: web_sys::HtmlInputElement) {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Err(rejection) = validate_logo(&file.type_(), file.size() as u64) {
            log::debug!("логотип отклонён: {rejection:?}");
            self.logo_error.set(Some(rejection.user_message().to_string()));
            alert(rejection.user_message());
            input.set_value("");
            return;
        }
        self.logo_error.set(None);

        let vm = *self;
        leptos::task::spawn_local(async move {
            match logo::read_as_data_uri(file).await {
                // завершение чтения — немедленная перегенерация
                Ok(data_uri) => vm.dispatch(QrFormUpdate::Logo(Some(data_uri))),
                Err(e) => {
                    log::warn!("чтение логотипа не удалось: {e}");
                    vm.logo_error.set(Some(e));
                }
            }
        });
    }

    /// Убирает логотип и перегенерирует; уровень коррекции ошибок
    /// возвращается к базовому. Безопасно и без загруженного логотипа.
    pub fn remove_logo(&self) {
        self.logo_error.set(None);
        self.dispatch(QrFormUpdate::Logo(None));
    }

    pub fn export(&self, format: ExportFormat) {
        self.qr.with_value(|qr| {
            if let Some(qr) = qr {
                if let Err(e) = renderer::export(qr, format) {
                    log::warn!("экспорт не удался: {e}");
                }
            }
        });
    }
}

impl Default for QrStudioVm {
    fn default() -> Self {
        Self::new()
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.alert_with_message(message);
    }
}

/// Объявление для скринридеров после успешной генерации
pub fn status_message(size_px: u32, style_name: &str) -> String {
    format!(
        "QR-код успешно сгенерирован. Размер: {size_px} пикселей, стиль: {style_name}. Кнопки скачивания доступны."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(
            status_message(400, "Квадратные"),
            "QR-код успешно сгенерирован. Размер: 400 пикселей, стиль: Квадратные. Кнопки скачивания доступны."
        );
    }
}
