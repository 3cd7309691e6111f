//! json-match - Structural equality for decoded JSON values.
//!
//! Compares two [`Value`] trees under a [`CompareOptions`] policy:
//! - `ignore_array_order` compares arrays as multisets. Primitive-only
//!   arrays are counted, other arrays are matched greedily element by
//!   element.
//! - `skip_depth_greater` treats every subtree deeper than the cutoff as
//!   equal.
//!
//! On mismatch a [`Mismatch`] names the first differing location of the left
//! document as a dotted path, e.g. `LJSON.a.[1].b not match RJSON.a.[1].b`.
//!
//! Parsing is left to the caller; [`Value`] converts from
//! [`serde_json::Value`].

mod array;
mod comparator;
mod error;
mod object;
mod options;
pub mod path;
pub mod primitive;
mod trace;
mod value;

pub use comparator::{compare, Comparator, MAX_DEPTH};
pub use error::{Mismatch, OptionsError};
pub use options::CompareOptions;
pub use trace::{NodeResult, TraceCallback, TraceContext};
pub use value::{Map, Tag, Value};
