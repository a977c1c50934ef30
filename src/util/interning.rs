//! Interned names for configuration-graph identifiers.
//!
//! Configuration, component, and binary names are compared constantly while
//! rules fire; `Name` stores each distinct string once in a global interner
//! so equality is a pointer check and cloning is a copy.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{LazyLock, RwLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Global name interner
static INTERNER: LazyLock<RwLock<HashSet<&'static str>>> =
    LazyLock::new(|| RwLock::new(HashSet::new()));

/// An interned identifier with O(1) equality and copy-cheap cloning.
///
/// All `Name`s with the same content share one allocation, so equality and
/// hashing work on the pointer alone.
#[derive(Clone, Copy)]
pub struct Name {
    inner: &'static str,
}

impl Name {
    /// Intern a string-like value.
    pub fn new(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();

        // Fast path: already interned (read lock only)
        {
            let interner = INTERNER.read().unwrap();
            if let Some(&interned) = interner.get(s) {
                return Name { inner: interned };
            }
        }

        // Slow path: intern under the write lock
        let mut interner = INTERNER.write().unwrap();

        // Double-check after acquiring write lock
        if let Some(&interned) = interner.get(s) {
            return Name { inner: interned };
        }

        let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
        interner.insert(leaked);

        Name { inner: leaked }
    }

    /// Get the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.inner
    }

    /// Check if the name is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the length of the name.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Copy with the first character upper-cased.
    ///
    /// The empty name folds to itself.
    pub fn capitalized(&self) -> Name {
        let mut chars = self.inner.chars();
        match chars.next() {
            Some(first) if !first.is_uppercase() => {
                Name::new(format!("{}{}", first.to_uppercase(), chars.as_str()))
            }
            _ => *self,
        }
    }

    /// Copy with the first character lower-cased.
    ///
    /// The empty name folds to itself.
    pub fn uncapitalized(&self) -> Name {
        let mut chars = self.inner.chars();
        match chars.next() {
            Some(first) if !first.is_lowercase() => {
                Name::new(format!("{}{}", first.to_lowercase(), chars.as_str()))
            }
            _ => *self,
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Name::new("")
    }
}

impl Deref for Name {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.inner
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        self.inner
    }
}

impl PartialEq for Name {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.inner, other.inner)
    }
}

impl Eq for Name {}

impl PartialEq<&str> for Name {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl PartialOrd for Name {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(other.inner)
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal names share an allocation, so the address is the identity
        std::ptr::hash(self.inner, state)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner, f)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::new(s)
    }
}

impl From<&String> for Name {
    fn from(s: &String) -> Self {
        Name::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Name::new(s))
    }
}
