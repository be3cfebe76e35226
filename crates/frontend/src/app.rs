use crate::studio::QrStudio;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-shell">
            <h1>"Генератор QR-кодов"</h1>
            <QrStudio />
        </main>
    }
}
