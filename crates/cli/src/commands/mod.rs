pub(crate) mod migrate;
pub(crate) mod search;
pub(crate) mod seed;
pub(crate) mod serve;
