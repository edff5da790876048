pub mod constants;
mod authority;
mod builder;
mod context;
mod error;
mod options;
mod params;
mod path;
mod util;

pub use builder::RequestContextBuilder;
pub use context::RequestContext;
pub use error::{ConfigurationError, MissingParameterError, ParameterLocation, RequestError};
pub use options::{ContextOptions, SchemePolicy};
pub use params::Parameters;
