pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod discovery;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
