//! Mutex selection for std and `no_std` builds.
//!
//! Round state must stay lockable even if a client thread panics while
//! holding the lock, so the std path strips poisoning instead of
//! propagating it.

#[cfg(feature = "std")]
mod imp {
    use std::sync::{MutexGuard, PoisonError};

    pub struct Mutex<T>(std::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub const fn new(value: T) -> Self {
            Self(std::sync::Mutex::new(value))
        }

        pub fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
mod imp {
    pub use spin::Mutex;
}

pub(crate) use imp::Mutex;
