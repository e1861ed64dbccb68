pub(crate) mod mono;
pub(crate) mod oracle;
pub(crate) mod regions;
