//! Building blocks shared by every formwork crate.
//!
//! This crate provides:
//!
//! - **Property stores** with case-insensitive keys ([`PropertyStore`])
//! - **Tag trees**, the abstract markup produced by renderers ([`Tag`])
//! - **Element kinds**, static type tags with a declared parent ([`ElementKind`])
//! - **Value types** and basic text conversion ([`ValueType`], [`TypedValue`])
//!
//! # Module Organization
//!
//! - [`property`]: Case-insensitive key/value bag
//! - [`tag`]: Tag nodes with attributes, content and children
//! - [`kind`]: Element kind hierarchy and the root kind
//! - [`value`]: Value types, typed values and [`convert_basic`]
//! - [`error`]: Conversion errors
//!
//! # Example
//!
//! ```rust
//! use formwork_model::{PropertyStore, Tag, ValueType, TypedValue, convert_basic};
//!
//! let mut props = PropertyStore::new();
//! props.set(" Class ", "wide");
//! assert_eq!(props.get("CLASS"), Some("wide"));
//!
//! let tag = Tag::new("span").with_content("hi");
//! assert_eq!(tag.name(), Some("span"));
//!
//! let value = convert_basic(Some(" 42 "), ValueType::Int).unwrap();
//! assert_eq!(value, TypedValue::Int(42));
//! ```

pub mod error;
pub mod kind;
pub mod property;
pub mod tag;
pub mod value;

pub use error::{ModelError, Result};
pub use kind::{ELEMENT, ElementKind};
pub use property::PropertyStore;
pub use tag::Tag;
pub use value::{TypedValue, ValueType, convert_basic};
