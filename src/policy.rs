use indexmap::IndexMap;
use std::iter::FromIterator;

/// Key for a band-structure path, takes precedence over every density scheme.
pub const LINE_DENSITY: &str = "line_density";
/// Key for the k-points per reciprocal volume scheme.
pub const KPPVOL: &str = "kppvol";
/// Key for the k-points per atom scheme.
pub const KPPA: &str = "kppa";
/// Key for the per reciprocal axis length density scheme.
pub const LENGTH_DENSITIES: &str = "length_densities";

/// The value attached to a scheme in a [KpointPolicy].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolicyValue {
    Scalar(f64),
    Triple([f64; 3]),
}

impl PolicyValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Triple(_) => None,
        }
    }

    pub fn as_triple(&self) -> Option<[f64; 3]> {
        match self {
            Self::Scalar(_) => None,
            Self::Triple(v) => Some(*v),
        }
    }
}

impl From<f64> for PolicyValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<u32> for PolicyValue {
    fn from(v: u32) -> Self {
        Self::Scalar(v as f64)
    }
}

impl From<[f64; 3]> for PolicyValue {
    fn from(v: [f64; 3]) -> Self {
        Self::Triple(v)
    }
}

/// A mapping from k-point scheme name to its parameter.
///
/// Insertion order is kept as it decides which of several equally dense grids
/// is chosen by [resolve](crate::resolver::resolve).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KpointPolicy {
    schemes: IndexMap<String, PolicyValue>,
}

impl KpointPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scheme, consuming and returning the policy for chaining.
    pub fn with(mut self,
                key: impl Into<String>,
                value: impl Into<PolicyValue>)
                -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a scheme. Replacing an existing scheme keeps its position.
    pub fn insert(&mut self,
                  key: impl Into<String>,
                  value: impl Into<PolicyValue>)
                  -> Option<PolicyValue> {
        self.schemes.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PolicyValue> {
        self.schemes.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.schemes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// The schemes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PolicyValue)> {
        self.schemes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for KpointPolicy
    where K: Into<String>,
          V: Into<PolicyValue>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut policy = Self::new();
        for (k, v) in iter {
            policy.insert(k, v);
        }
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_new_is_empty() {
        let policy = KpointPolicy::new();
        assert!(policy.is_empty());
        assert_eq!(policy.len(), 0);
    }

    #[test]
    fn policy_keeps_insertion_order() {
        let policy = KpointPolicy::new().with(KPPVOL, 50.)
                                        .with(KPPA, 1000u32)
                                        .with(LENGTH_DENSITIES, [10., 10., 20.]);
        let keys = policy.iter().map(|(k, _)| k).collect::<Vec<&str>>();
        assert_eq!(keys, vec![KPPVOL, KPPA, LENGTH_DENSITIES]);
    }

    #[test]
    fn policy_replace_keeps_position() {
        let mut policy = KpointPolicy::new().with(KPPA, 100.).with(KPPVOL, 5.);
        assert_eq!(policy.insert(KPPA, 200.), Some(PolicyValue::Scalar(100.)));
        let keys = policy.iter().map(|(k, _)| k).collect::<Vec<&str>>();
        assert_eq!(keys, vec![KPPA, KPPVOL]);
        assert_eq!(policy.get(KPPA), Some(&PolicyValue::Scalar(200.)));
    }

    #[test]
    fn policy_from_iter() {
        let policy = vec![(LINE_DENSITY, 20.), (KPPA, 1000.)].into_iter()
                                                              .collect::<KpointPolicy>();
        assert!(policy.contains(LINE_DENSITY));
        assert!(policy.contains(KPPA));
        assert!(!policy.contains(KPPVOL));
    }

    #[test]
    fn policy_value_shapes() {
        assert_eq!(PolicyValue::from(2.).as_scalar(), Some(2.));
        assert_eq!(PolicyValue::from(2.).as_triple(), None);
        assert_eq!(PolicyValue::from([1., 2., 3.]).as_triple(),
                   Some([1., 2., 3.]));
        assert_eq!(PolicyValue::from([1., 2., 3.]).as_scalar(), None);
        assert_eq!(PolicyValue::from(7u32), PolicyValue::Scalar(7.));
    }
}
