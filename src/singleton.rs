//! Singleton Pattern
//!
//! [`Repository::instance`] is the only way to reach a `Repository`. The
//! value is built on first access behind `lazy_static`'s one-time guard, so
//! concurrent first calls still construct exactly one instance, and it lives
//! until the process exits.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::console::Console;

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

lazy_static::lazy_static! {
    static ref REPOSITORY: Repository = Repository::new();
}

#[derive(Debug)]
pub struct Repository {
    operations: AtomicU64,
}

impl Repository {
    fn new() -> Self {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("repository singleton constructed");
        Self {
            operations: AtomicU64::new(0),
        }
    }

    pub fn instance() -> &'static Repository {
        &REPOSITORY
    }

    /// Returns how many times business logic has run, including this call.
    pub fn some_business_logic(&self) -> u64 {
        self.operations.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn operations(&self) -> u64 {
        self.operations.load(Ordering::SeqCst)
    }

    /// How many repositories this process has built. Never more than one.
    pub fn constructed() -> usize {
        CONSTRUCTED.load(Ordering::SeqCst)
    }
}

pub fn demo(out: &mut dyn Console) {
    let one = Repository::instance();
    let two = Repository::instance();

    if std::ptr::eq(one, two) {
        out.say("Singleton works, both variables contain the same instance.");
    } else {
        out.say("Singleton failed, variables contain different instances.");
    }

    one.some_business_logic();
    out.say(&format!(
        "Business logic calls seen through the second handle: {}",
        two.operations()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use std::thread;

    #[test]
    fn test_same_instance_every_time() {
        let one = Repository::instance();
        let two = Repository::instance();
        assert!(std::ptr::eq(one, two));
        assert_eq!(Repository::constructed(), 1);
    }

    #[test]
    fn test_concurrent_first_access_builds_one() {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| Repository::instance() as *const Repository as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(Repository::constructed(), 1);
    }

    #[test]
    fn test_state_is_shared_between_handles() {
        let before = Repository::instance().operations();
        let count = Repository::instance().some_business_logic();
        assert!(count > before);
        assert!(Repository::instance().operations() >= count);
    }

    #[test]
    fn test_demo_confirms_identity() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines()[0],
            "Singleton works, both variables contain the same instance."
        );
    }
}
