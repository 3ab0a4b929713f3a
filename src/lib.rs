//! Query-string codec: parse `key=value&...` text into ordered multi-valued
//! maps, build it back in insertion, natural or caller-chosen key order, and
//! append or strip parameters on a URL string.
//!
//! Every encode and decode takes an explicit `Option<Charset>`; `None` means
//! tokens are used verbatim.

// Internal modules (not public API)
mod codec;
mod error;
mod helpers;
mod joiner;
mod query_builder;
mod query_parser;
mod types;
mod url_mutator;

// Public API
pub use codec::{Charset, QUERY_COMPONENT_SET, decode, encode, encode_into};
pub use error::{Error, Result};
pub use joiner::join_values_order_by_include_keys;
pub use query_builder::{
    build_from_array_value_map, build_from_single_value_map, build_natural_ordering,
    build_ordered_by_keys, build_safe,
};
pub use query_parser::{ParsedQuery, to_array_value_map, to_single_value_map};
pub use types::{ArrayValueMap, ParamLookup, QueryToken, SingleValueMap};
pub use url_mutator::{
    add_parameter, add_parameter_array_value_map, add_parameter_single_value_map, query_of,
    remove_parameters, retain_parameters,
};
