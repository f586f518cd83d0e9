//! The wire-marshaling layer.
//!
//! The Gong API speaks camelCase JSON; the Rust side speaks snake_case
//! structs. This module holds the pieces that bridge the two: the case
//! converter, the recursive key translator for nested request/response
//! structures, the [`WireRecord`] contract implemented by every typed
//! record, and the serde codecs for Gong's flexible timestamp encoding.

pub mod case;
pub mod record;
pub mod time;
pub mod translate;

pub use case::{from_wire_case, to_wire_case};
pub use record::WireRecord;
