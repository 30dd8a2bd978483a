// A wrapper around the `oxc_resolver` crate carrying the location
// classification policy of this plugin.

mod resolver;

pub use oxc_resolver::ResolveError;

pub use crate::resolver::Resolver;
