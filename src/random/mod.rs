pub(crate) mod ambient;
pub(crate) mod mulberry;
pub(crate) mod source;
