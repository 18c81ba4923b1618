pub(crate) mod config;
pub(crate) mod image;
pub(crate) mod layout;
pub(crate) mod offset;
pub(crate) mod scroll;
pub(crate) mod view;
