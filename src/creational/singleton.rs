// Singleton Pattern - one process-wide instance behind a single accessor.
//
// The instance is created on first call to `Singleton::instance`. `OnceLock`
// makes that creation race-free: concurrent first callers block until one
// initialiser finishes and all receive the same reference. The counter only
// moves inside the initialiser, so it counts creations, not accesses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::info;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();
static CREATED: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            let count = CREATED.fetch_add(1, Ordering::SeqCst) + 1;
            info!(count, "singleton created");
            Singleton { _private: () }
        })
    }

    /// Number of times the instance has been constructed: 0 before first
    /// access, 1 forever after.
    pub fn creation_count() -> usize {
        CREATED.load(Ordering::SeqCst)
    }

    pub fn do_something(&self) -> String {
        format!(
            "Singleton instance called. and count is {}",
            Self::creation_count()
        )
    }
}
