//! Testing utilities for stream pipelines.
//!
//! - **Assertions**: compare stream output and collector results with expectations
//! - **Test data builders**: assemble input data fluently
//! - **Debug utilities**: pass-through stages that print what flows through
//!
//! # Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! let s = TestDataBuilder::<i32>::new()
//!     .add_range(1..=5)
//!     .into_stream()
//!     .debug_count("source")
//!     .map(|x| x * 2);
//!
//! assert_stream_eq(s, &[2, 4, 6, 8, 10]);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;

pub use assertions::*;
pub use builders::*;
pub use debug::*;
