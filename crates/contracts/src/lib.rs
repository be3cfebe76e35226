pub mod color;
pub mod debounce;
pub mod form;
pub mod render;
pub mod validation;
