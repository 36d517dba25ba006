use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Interning collections of identity handles
pub mod collection;

/// Scored documents and the runs holding them
pub mod run;

pub use self::collection::ItemCollection;
pub use self::run::{Run, ScoredDocument};

/// Shared behavior of the Document, Query and System handles
pub trait Identity: Clone + Ord + Hash + fmt::Debug {
    /// Wraps an already shared id
    fn from_id(id: Arc<str>) -> Self;

    /// Returns the id
    fn id(&self) -> &str;
}

macro_rules! identity {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Creates a handle outside of any collection
            pub fn new(id: &str) -> Self {
                $name(Arc::from(id))
            }

            /// Returns the id
            pub fn id(&self) -> &str {
                &self.0
            }
        }

        impl Identity for $name {
            fn from_id(id: Arc<str>) -> Self {
                $name(id)
            }

            fn id(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), &*self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identity! {
    /// A document of the collection, identified by its id
    Document
}

identity! {
    /// An information need, identified by its topic id
    Query
}

identity! {
    /// A retrieval system, identified by its run tag
    System
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_handles_compare_by_id() {
        let a = Query::new("301");
        let b = Query::new("301");
        assert_eq!(a, b);
        assert!(Query::new("301") < Query::new("302"));
        assert_eq!(a.to_string(), "301");
        assert_eq!(format!("{:?}", a), "Query(\"301\")");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut scores = BTreeMap::new();
        scores.insert(System::new("STANDARD"), 1.0);
        assert_eq!(scores.get("STANDARD"), Some(&1.0));
        assert_eq!(scores.get("OTHER"), None);
    }
}
