pub(crate) mod color;
pub(crate) mod squiggle;
pub(crate) mod tessellate;
pub(crate) mod wave;
