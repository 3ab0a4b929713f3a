mod charset;
mod percent_encode;

pub use charset::Charset;
pub use percent_encode::{QUERY_COMPONENT_SET, decode, encode, encode_into};
