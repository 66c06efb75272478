mod classes;
mod fields;
pub mod lints;
mod literals;
mod members;
pub mod tokens;
pub(super) mod types;

#[cfg(test)]
mod tests;

pub use classes::AnnotatedClass;
pub use fields::Field;
pub use lints::LintConfig;
pub use literals::DefaultLiteral;
#[cfg(test)]
pub use members::MemberKind;
pub use members::{BuilderMember, BuilderUnit, FieldAccess, FieldBinding, ReEntryMode, TriggerShape};
pub use tokens::{BuilderToken, ModuleToken};
#[cfg(test)]
pub use types::PrimitiveKind;
pub use types::{DeclaredType, TypeCategory, TypePath};
