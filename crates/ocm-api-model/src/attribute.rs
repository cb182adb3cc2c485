// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage rules for the attributes of model objects.
//!
//! Every attribute of a model object is kept as an `Option<T>`: `None` means
//! the attribute was never given a value, which is distinct from having been
//! explicitly set to the zero value of `T`. The [`Attribute`] trait describes,
//! for each storable `T`, what a builder holds while the object is being
//! assembled and what a getter hands back to callers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::ser::{self, Serialize};

use crate::BuildError;

/// A type that can be stored as an attribute of a model object.
pub trait Attribute:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned
{
    /// The form held by a builder before the object is built.
    type Builder: Clone + fmt::Debug;

    /// The borrowed form returned by attribute getters.
    type Ref<'a>
    where
        Self: 'a;

    /// Produces a value from its builder form.
    fn build(builder: &Self::Builder) -> Result<Self, BuildError>;

    /// Produces a builder mirroring this value. The result shares no
    /// storage with `self`.
    fn to_builder(&self) -> Self::Builder;

    /// Returns the borrowed form handed out by getters.
    fn view(&self) -> Self::Ref<'_>;

    /// The value reported by getters when the attribute is absent.
    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a;

    /// Fails if the value has no JSON representation that decodes back to
    /// it. Checked before each attribute is written.
    fn check_encodable<E: ser::Error>(&self) -> Result<(), E> {
        Ok(())
    }
}

impl Attribute for String {
    type Builder = String;
    type Ref<'a> = &'a str where Self: 'a;

    fn build(builder: &String) -> Result<Self, BuildError> {
        Ok(builder.clone())
    }

    fn to_builder(&self) -> String {
        self.clone()
    }

    fn view(&self) -> Self::Ref<'_> {
        self.as_str()
    }

    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a,
    {
        ""
    }
}

// Scalars are stored, built and handed out by value.
macro_rules! scalar_attribute {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Attribute for $ty {
                type Builder = $ty;
                type Ref<'a> = $ty where Self: 'a;

                fn build(builder: &$ty) -> Result<Self, BuildError> {
                    Ok(*builder)
                }

                fn to_builder(&self) -> $ty {
                    *self
                }

                fn view(&self) -> Self::Ref<'_> {
                    *self
                }

                fn zero<'a>() -> Self::Ref<'a>
                where
                    Self: 'a,
                {
                    <$ty>::default()
                }
            }
        )+
    };
}

scalar_attribute!(bool, i64, DateTime<Utc>);

// JSON has no NaN or infinity; serde_json writes them as `null`, which would
// decode as an absent attribute.
impl Attribute for f64 {
    type Builder = f64;
    type Ref<'a> = f64 where Self: 'a;

    fn build(builder: &f64) -> Result<Self, BuildError> {
        Ok(*builder)
    }

    fn to_builder(&self) -> f64 {
        *self
    }

    fn view(&self) -> Self::Ref<'_> {
        *self
    }

    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a,
    {
        0.0
    }

    fn check_encodable<E: ser::Error>(&self) -> Result<(), E> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(E::custom(format_args!("unsupported value: {self}")))
        }
    }
}

impl<T: Attribute> Attribute for Vec<T> {
    type Builder = Vec<T::Builder>;
    type Ref<'a> = &'a [T] where Self: 'a;

    fn build(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder.iter().map(T::build).collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter().map(T::to_builder).collect()
    }

    fn view(&self) -> Self::Ref<'_> {
        self.as_slice()
    }

    fn check_encodable<E: ser::Error>(&self) -> Result<(), E> {
        self.iter().try_for_each(T::check_encodable)
    }

    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a,
    {
        &[]
    }
}

/// Maps are kept ordered by key, so encoding them always emits keys in
/// lexicographic order regardless of insertion order.
impl<V: Attribute> Attribute for BTreeMap<String, V> {
    type Builder = BTreeMap<String, V::Builder>;
    type Ref<'a> = Option<&'a BTreeMap<String, V>> where Self: 'a;

    fn build(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder
            .iter()
            .map(|(key, value)| Ok((key.clone(), V::build(value)?)))
            .collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter()
            .map(|(key, value)| (key.clone(), value.to_builder()))
            .collect()
    }

    fn view(&self) -> Self::Ref<'_> {
        Some(self)
    }

    fn check_encodable<E: ser::Error>(&self) -> Result<(), E> {
        self.values().try_for_each(V::check_encodable)
    }

    fn zero<'a>() -> Self::Ref<'a>
    where
        Self: 'a,
    {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builders_do_not_alias_values() {
        let tags: BTreeMap<String, String> =
            [("a".to_string(), "1".to_string())].into_iter().collect();
        let mut builder = tags.to_builder();
        builder.insert("b".to_string(), "2".to_string());

        assert_eq!(tags.len(), 1);
        let built = BTreeMap::<String, String>::build(&builder).unwrap();
        assert_eq!(built.len(), 2);

        let zones = vec!["us-east-1a".to_string()];
        let mut builder = zones.to_builder();
        builder[0].push('x');
        assert_eq!(zones[0], "us-east-1a");
    }

    #[test]
    fn zero_values() {
        assert_eq!(String::zero(), "");
        assert!(!bool::zero());
        assert_eq!(i64::zero(), 0);
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(DateTime::<Utc>::zero(), DateTime::<Utc>::default());
        assert!(Vec::<String>::zero().is_empty());
        assert!(BTreeMap::<String, String>::zero().is_none());
    }

    #[test]
    fn only_finite_floats_are_encodable() {
        type E = serde_json::Error;
        assert!(1.5f64.check_encodable::<E>().is_ok());
        assert!(f64::NAN.check_encodable::<E>().is_err());
        assert!(vec![0.0, f64::INFINITY].check_encodable::<E>().is_err());
        let prices: BTreeMap<String, f64> =
            [("spot".to_string(), f64::NEG_INFINITY)].into_iter().collect();
        assert!(prices.check_encodable::<E>().is_err());
        assert!("text".to_string().check_encodable::<E>().is_ok());
    }
}
