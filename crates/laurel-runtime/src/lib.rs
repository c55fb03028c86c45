//! Laurel runtime support library.
//!
//! Provides the native builtins required by Laurel's compiled output:
//! - By-value record passing (`create_person`, `print_person`)
//! - Scalar diagnostic printing (`println`)
//! - Raw sequence indexing (`index_arr`, plus checked variants)
//! - Allocator hooks for a host-installed GC (`__laurel_alloc`, `__laurel_dealloc`)
//!
//! Every exported symbol is `extern "C"` and unmangled; generated code calls
//! them directly with no dispatch layer in between. The library keeps no
//! cross-call state apart from the process-wide allocator hooks, which the
//! hosting process installs once before any generated code runs.

pub mod array;
pub mod builtins;
pub mod memory;
pub mod person;

pub use array::{IndexError, index_arr, index_checked, laurel_index_checked};
pub use builtins::println;
pub use memory::{__laurel_alloc, __laurel_dealloc, laurel_set_allocator};
pub use person::{Person, create_person, print_person};
