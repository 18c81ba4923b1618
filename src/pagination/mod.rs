pub(crate) mod config;
pub(crate) mod dot;
pub(crate) mod pager;
pub(crate) mod resolver;
pub(crate) mod row;
