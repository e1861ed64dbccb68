pub(crate) mod coordinator;
pub(crate) mod text;
pub(crate) mod text_view;
