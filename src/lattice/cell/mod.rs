pub(crate) mod params;
pub(crate) mod system;
pub(crate) mod crystal;
