//! Allocator hooks for the host's memory-management service.
//!
//! The hosting process links a collector (historically Boehm `GC_malloc`)
//! and installs it here during start-up, before any generated code runs.
//! The runtime itself neither initializes nor tears the collector down; when
//! no hooks are installed, requests fall back to Rust's global allocator so
//! the library is testable in isolation with a stub service.

use std::alloc::Layout;
use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Allocation entry point provided by the host: `(size) -> ptr`.
pub type AllocFn = unsafe extern "C" fn(u64) -> *mut u8;

/// Deallocation entry point provided by the host: `(ptr, size) -> ()`.
///
/// A tracing collector may install a no-op here.
pub type DeallocFn = unsafe extern "C" fn(*mut u8, u64);

/// Alignment guaranteed by the fallback allocator, matching the collector's
/// word alignment assumed by generated code.
const ALLOC_ALIGN: usize = 8;

#[derive(Clone, Copy)]
struct AllocatorHooks {
    alloc: AllocFn,
    dealloc: DeallocFn,
}

/// Process-wide hook state.
///
/// Safety: the hooks are written during process start-up (and by serialized
/// tests) before generated code allocates; afterwards the cell is only read.
/// `UnsafeCell` avoids `static mut` (denied in Rust 2024 edition).
struct HookState {
    hooks: UnsafeCell<Option<AllocatorHooks>>,
}

unsafe impl Sync for HookState {}

static HOOKS: HookState = HookState {
    hooks: UnsafeCell::new(None),
};
static HOOKS_INSTALLED: AtomicBool = AtomicBool::new(false);

fn installed_hooks() -> Option<AllocatorHooks> {
    if HOOKS_INSTALLED.load(Ordering::Acquire) {
        unsafe { *HOOKS.hooks.get() }
    } else {
        None
    }
}

/// Install (or, with `None`, clear) the host's allocation service.
///
/// Both hooks must be provided together; a partial pair clears the service.
/// Must be called before generated code runs — installation is not
/// synchronized against concurrent allocation.
///
/// Signature: `(alloc: ptr, dealloc: ptr) -> ()`
#[unsafe(no_mangle)]
pub extern "C" fn laurel_set_allocator(alloc: Option<AllocFn>, dealloc: Option<DeallocFn>) {
    match (alloc, dealloc) {
        (Some(alloc), Some(dealloc)) => {
            unsafe { *HOOKS.hooks.get() = Some(AllocatorHooks { alloc, dealloc }) };
            HOOKS_INSTALLED.store(true, Ordering::Release);
        }
        _ => {
            HOOKS_INSTALLED.store(false, Ordering::Release);
            unsafe { *HOOKS.hooks.get() = None };
        }
    }
}

/// # Safety
///
/// Caller must eventually free the returned pointer via `__laurel_dealloc`
/// with the same `size` (a no-op under a tracing collector's hooks).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __laurel_alloc(size: u64) -> *mut u8 {
    if size == 0 {
        return std::ptr::null_mut();
    }
    if let Some(hooks) = installed_hooks() {
        return unsafe { (hooks.alloc)(size) };
    }
    let Ok(size) = usize::try_from(size) else {
        return std::ptr::null_mut();
    };
    let Ok(layout) = Layout::from_size_align(size, ALLOC_ALIGN) else {
        return std::ptr::null_mut();
    };
    unsafe { std::alloc::alloc(layout) }
}

/// # Safety
///
/// `ptr` must have been allocated by `__laurel_alloc` with the same `size`
/// and the same hook configuration, or be null (in which case this is a
/// no-op).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __laurel_dealloc(ptr: *mut u8, size: u64) {
    if ptr.is_null() || size == 0 {
        return;
    }
    if let Some(hooks) = installed_hooks() {
        unsafe { (hooks.dealloc)(ptr, size) };
        return;
    }
    let Ok(size) = usize::try_from(size) else {
        return;
    };
    let Ok(layout) = Layout::from_size_align(size, ALLOC_ALIGN) else {
        return;
    };
    unsafe { std::alloc::dealloc(ptr, layout) };
}
