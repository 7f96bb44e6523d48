pub(crate) mod sysfs;
