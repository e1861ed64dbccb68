pub(crate) mod backend;
pub(crate) mod corner;
pub(crate) mod cpu;
pub(crate) mod recording;
pub(crate) mod svg;
