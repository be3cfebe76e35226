pub mod logo;
pub mod renderer;
pub mod view;
pub mod view_model;

pub use view::QrStudio;
