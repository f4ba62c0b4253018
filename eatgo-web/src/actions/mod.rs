mod creators;
mod descriptors;
#[cfg(test)]
pub(crate) mod testing;

pub use creators::ActionCreators;
pub use descriptors::*;
