pub(crate) mod color;
pub(crate) mod scene;
pub(crate) mod style;
