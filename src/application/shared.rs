use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{LifeError, LifeResult};
use super::engine::LifeEngine;

/// Thread-safe handle to one engine.
///
/// Mutations (step, toggle, fill) take the write lock. Queries take the read
/// lock, so several renderers can read at once but never during a step.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<LifeEngine>>,
}

impl SharedEngine {
    pub fn new(engine: LifeEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn read(&self) -> LifeResult<RwLockReadGuard<'_, LifeEngine>> {
        self.inner.read().map_err(|_| LifeError::Poisoned)
    }

    pub fn write(&self) -> LifeResult<RwLockWriteGuard<'_, LifeEngine>> {
        self.inner.write().map_err(|_| LifeError::Poisoned)
    }

    pub fn step(&self) -> LifeResult<u64> {
        Ok(self.write()?.step())
    }

    pub fn toggle_cell(&self, x: usize, y: usize) -> LifeResult<()> {
        self.write()?.toggle_cell(x, y)
    }

    pub fn randomize_fill_entropy(&self) -> LifeResult<()> {
        self.write()?.randomize_fill_entropy();
        Ok(())
    }

    pub fn is_alive(&self, x: usize, y: usize) -> LifeResult<bool> {
        self.read()?.is_alive(x, y)
    }

    pub fn count_neighbors(&self, x: usize, y: usize) -> LifeResult<u8> {
        self.read()?.count_neighbors(x, y)
    }

    pub fn generation_count(&self) -> LifeResult<u64> {
        Ok(self.read()?.generation_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedEngine::new(LifeEngine::new(10));
        let other = shared.clone();

        other.toggle_cell(1, 1).unwrap();
        assert!(shared.is_alive(1, 1).unwrap());
        assert_eq!(shared.step().unwrap(), 1);
        assert_eq!(other.generation_count().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_steps_serialize() {
        let shared = SharedEngine::new(LifeEngine::new(16));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        engine.step().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.generation_count().unwrap(), 100);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = SharedEngine::new(LifeEngine::new(4));
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poison the engine lock");
        })
        .join();

        assert!(matches!(shared.step(), Err(LifeError::Poisoned)));
        assert!(matches!(shared.count_neighbors(0, 0), Err(LifeError::Poisoned)));
    }
}
