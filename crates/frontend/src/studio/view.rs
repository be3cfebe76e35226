//! Форма студии: поля параметров, предпросмотр и экспорт

use contracts::color::HexColor;
use contracts::form::{CornerStyle, DotsStyle, QrFormUpdate, SIZE_MAX_PX, SIZE_MIN_PX};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use super::renderer::ExportFormat;
use super::view_model::QrStudioVm;

#[component]
pub fn QrStudio() -> impl IntoView {
    let vm = QrStudioVm::new();

    // Первичная генерация с состоянием по умолчанию
    Effect::new(move |_| {
        vm.render();
    });

    view! {
        <form
            class="qr-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.render();
            }
        >
            <div class="qr-form__field">
                <label for="url">"Адрес ссылки"</label>
                <input
                    id="url"
                    type="text"
                    autocomplete="url"
                    aria-describedby="url-error"
                    aria-invalid=move || vm.url_status.get().shows_error().to_string()
                    prop:value=move || vm.form.get().url
                    on:input=move |ev| vm.dispatch(QrFormUpdate::Url(event_target_value(&ev)))
                />
                <p
                    id="url-error"
                    class="qr-form__error"
                    hidden=move || !vm.url_status.get().shows_error()
                >
                    "Введите корректный адрес, например https://example.com"
                </p>
            </div>

            <div class="qr-form__field">
                <label for="dotsColor">"Цвет точек"</label>
                <input
                    id="dotsColor"
                    type="color"
                    prop:value=move || vm.form.get().dots_color.to_css()
                    on:input=move |ev| {
                        if let Some(color) = HexColor::parse(&event_target_value(&ev)) {
                            vm.dispatch(QrFormUpdate::DotsColor(color));
                        }
                    }
                />
            </div>

            <div class="qr-form__field">
                <label for="backgroundColor">"Цвет фона"</label>
                <input
                    id="backgroundColor"
                    type="color"
                    prop:value=move || vm.form.get().background_color.to_css()
                    on:input=move |ev| {
                        if let Some(color) = HexColor::parse(&event_target_value(&ev)) {
                            vm.dispatch(QrFormUpdate::BackgroundColor(color));
                        }
                    }
                />
            </div>

            <div
                class="warning-box"
                id="contrastWarning"
                hidden=move || !vm.low_contrast.get()
            >
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    "Низкий контраст цветов: QR-код может плохо считываться"
                </span>
            </div>

            <div class="qr-form__field">
                <label for="dotsType">"Стиль точек"</label>
                <select
                    id="dotsType"
                    prop:value=move || vm.form.get().dots_style.code()
                    on:change=move |ev| {
                        if let Some(style) = DotsStyle::from_code(&event_target_value(&ev)) {
                            vm.dispatch(QrFormUpdate::DotsStyle(style));
                        }
                    }
                >
                    {DotsStyle::all()
                        .into_iter()
                        .map(|style| view! {
                            <option value=style.code()>{style.display_name()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="qr-form__field">
                <label for="cornersSquareType">"Стиль углов"</label>
                <select
                    id="cornersSquareType"
                    prop:value=move || vm.form.get().corners_style.code()
                    on:change=move |ev| {
                        if let Some(style) = CornerStyle::from_code(&event_target_value(&ev)) {
                            vm.dispatch(QrFormUpdate::CornersStyle(style));
                        }
                    }
                >
                    {CornerStyle::all()
                        .into_iter()
                        .map(|style| view! {
                            <option value=style.code()>{style.display_name()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="qr-form__field">
                <label for="size">"Размер"</label>
                <input
                    id="size"
                    type="range"
                    min=SIZE_MIN_PX.to_string()
                    max=SIZE_MAX_PX.to_string()
                    step="10"
                    prop:value=move || vm.form.get().size_px.to_string()
                    on:input=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            vm.dispatch(QrFormUpdate::SizePx(size));
                        }
                    }
                />
                <output id="sizeOutput" for="size">
                    {move || format!("{}px", vm.form.get().size_px)}
                </output>
            </div>

            <div class="qr-form__field">
                <label for="logo">"Логотип (PNG, JPG или SVG, до 2 МБ)"</label>
                <input
                    id="logo"
                    type="file"
                    accept="image/png,image/jpeg,image/svg+xml"
                    on:change=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            vm.upload_logo(input);
                        }
                    }
                />
                {move || vm.form.get().logo_data.is_some().then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            vm.remove_logo();
                            // чистим и сам file input
                            if let Some(input) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.get_element_by_id("logo"))
                                .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                input.set_value("");
                            }
                        }
                    >
                        "Убрать логотип"
                    </Button>
                })}
                {move || vm.logo_error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
            </div>

            <button type="submit" class="button button--primary">
                "Сгенерировать QR-код"
            </button>

            <div id="qrcode" class="qr-preview"></div>

            <div class="download-actions" hidden=move || !vm.has_rendered.get()>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.export(ExportFormat::Svg)
                >
                    "Скачать SVG"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.export(ExportFormat::Png)
                >
                    "Скачать PNG"
                </Button>
            </div>

            <p id="qr-status" class="visually-hidden" role="status" aria-live="polite">
                {move || vm.status.get()}
            </p>
        </form>
    }
}
