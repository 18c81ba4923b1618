pub(crate) mod ease;
pub(crate) mod group;
pub(crate) mod spring;
pub(crate) mod timing;
pub(crate) mod value;
