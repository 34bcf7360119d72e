use std::fmt;
use std::hash::Hash;

use campus_core::Rule;
use campus_models::Audit;

pub type Rules = Vec<(&'static str, Rule)>;

/// An entity the foundation service can validate and persist.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    type Key: Copy + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Lowercase name used in messages, e.g. `"student guardian"`.
    const NAME: &'static str;

    fn key(&self) -> Self::Key;

    fn audit(&self) -> &Audit;

    /// Rules every key (or composite key part) must satisfy.
    fn key_rules(key: &Self::Key) -> Rules;

    /// Rules on domain fields, checked on create and on modify.
    fn field_rules(&self) -> Rules;

    /// Extra rules checked on create only.
    fn create_rules(&self) -> Rules {
        Vec::new()
    }
}
