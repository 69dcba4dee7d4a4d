pub mod table; // Lookup-table selection for generator outputs
pub mod voss; // Voss 1/f generator factory

pub use voss::{
    build_voss, build_voss_stateless, Callback, ConfigurationError, IntoStep, InvalidInputError,
    SharedCallback, Summer, Voss, VossError, VossStateless,
};
