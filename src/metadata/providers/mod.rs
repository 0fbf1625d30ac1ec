//! Metadata provider implementations

pub mod builtin;
pub mod cargo_install;
pub mod chain;

pub use builtin::BuiltinProvider;
pub use cargo_install::CargoInstallProvider;
pub use chain::ChainProvider;
