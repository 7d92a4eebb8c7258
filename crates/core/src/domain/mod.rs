pub mod inference;
pub mod pattern;

pub use inference::{
    compute_dependencies, infer_domains, Domain, DomainConfig, DomainConfigEntry, DomainDependency,
};
