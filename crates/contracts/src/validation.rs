//! Валидация URL и ограничений загружаемого логотипа

use url::Url;

/// Результат проверки URL. Пустое поле выделено отдельно: оно блокирует
/// генерацию, но не показывает ошибку — пользователь ещё не закончил ввод.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStatus {
    Empty,
    Invalid,
    Valid,
}

impl UrlStatus {
    /// Можно ли запускать генерацию с таким URL
    pub fn is_renderable(self) -> bool {
        matches!(self, UrlStatus::Valid)
    }

    /// Показывать ли инлайн-ошибку под полем
    pub fn shows_error(self) -> bool {
        matches!(self, UrlStatus::Invalid)
    }
}

/// Синтаксическая проверка: требуется схема и authority (хост)
pub fn check_url(input: &str) -> UrlStatus {
    if input.trim().is_empty() {
        return UrlStatus::Empty;
    }
    match Url::parse(input) {
        Ok(parsed) if parsed.has_host() => UrlStatus::Valid,
        _ => UrlStatus::Invalid,
    }
}

/// Максимальный размер файла логотипа
pub const MAX_LOGO_BYTES: u64 = 2 * 1024 * 1024;

/// Допустимые MIME-типы логотипа
pub const ALLOWED_LOGO_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/svg+xml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoRejection {
    UnsupportedType,
    TooLarge,
}

impl LogoRejection {
    pub fn user_message(self) -> &'static str {
        match self {
            LogoRejection::UnsupportedType => {
                "Неподдерживаемый формат файла. Используйте PNG, JPG или SVG."
            }
            LogoRejection::TooLarge => "Файл слишком большой. Максимальный размер: 2 МБ",
        }
    }
}

/// Проверка файла до какого-либо изменения состояния формы
pub fn validate_logo(mime: &str, size_bytes: u64) -> Result<(), LogoRejection> {
    if !ALLOWED_LOGO_TYPES.contains(&mime) {
        return Err(LogoRejection::UnsupportedType);
    }
    if size_bytes > MAX_LOGO_BYTES {
        return Err(LogoRejection::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url() {
        assert_eq!(check_url("https://example.com"), UrlStatus::Valid);
        assert_eq!(check_url("http://sub.example.com/path?q=1"), UrlStatus::Valid);
    }

    #[test]
    fn test_missing_scheme_is_invalid() {
        assert_eq!(check_url("example.com"), UrlStatus::Invalid);
        assert_eq!(check_url("www.example.com/page"), UrlStatus::Invalid);
        assert_eq!(check_url("просто текст"), UrlStatus::Invalid);
    }

    #[test]
    fn test_scheme_without_authority_is_invalid() {
        assert_eq!(check_url("mailto:user@example.com"), UrlStatus::Invalid);
        assert_eq!(check_url("data:text/plain,hi"), UrlStatus::Invalid);
    }

    #[test]
    fn test_empty_is_not_an_error_yet() {
        for input in ["", "   ", "\t"] {
            let status = check_url(input);
            assert_eq!(status, UrlStatus::Empty);
            assert!(!status.is_renderable());
            assert!(!status.shows_error());
        }
        assert!(check_url("nonsense").shows_error());
    }

    #[test]
    fn test_logo_type_allow_list() {
        assert_eq!(validate_logo("image/png", 1024), Ok(()));
        assert_eq!(validate_logo("image/jpeg", 1024), Ok(()));
        assert_eq!(validate_logo("image/svg+xml", 1024), Ok(()));
        assert_eq!(
            validate_logo("image/gif", 1024),
            Err(LogoRejection::UnsupportedType)
        );
        assert_eq!(
            validate_logo("application/pdf", 1024),
            Err(LogoRejection::UnsupportedType)
        );
    }

    #[test]
    fn test_logo_size_cap() {
        // 3 МБ PNG отклоняется
        assert_eq!(
            validate_logo("image/png", 3 * 1024 * 1024),
            Err(LogoRejection::TooLarge)
        );
        // 1 МБ SVG проходит
        assert_eq!(validate_logo("image/svg+xml", 1024 * 1024), Ok(()));
        // ровно 2 МБ — ещё в пределах
        assert_eq!(validate_logo("image/png", MAX_LOGO_BYTES), Ok(()));
        assert_eq!(
            validate_logo("image/png", MAX_LOGO_BYTES + 1),
            Err(LogoRejection::TooLarge)
        );
    }
}
