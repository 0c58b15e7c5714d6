use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database lock poisoned by a panicked writer")]
    Poisoned,
}

pub struct InnerDatabase<S> {
    db: Arc<Mutex<S>>,
}

// Manual impl: cloning shares the same state, so `S` itself need not be `Clone`.
impl<S> Clone for InnerDatabase<S> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

/// Shared handle over the in-memory tables.
///
/// Every handler performs its whole lookup-validate-mutate sequence inside a single
/// `transact` call, so two requests touching the same record can never interleave.
pub trait SafeDatabase<S>: Clone + Send + Sync + 'static {

    fn new(state: S) -> Self where Self: Sized;

    fn transact<R, F>(&self, f: F) -> Result<R, DatabaseError>
    where
        F: FnOnce(&mut S) -> R;

    fn read<R, F>(&self, f: F) -> Result<R, DatabaseError>
    where
        F: FnOnce(&S) -> R;
}


impl<S> SafeDatabase<S> for InnerDatabase<S>
where
    S: Send + 'static,
{

    fn new(state: S) -> Self {
        Self {
            db: Arc::new(Mutex::new(state)),
        }
    }


    fn transact<R, F>(&self, f: F) -> Result<R, DatabaseError>
    where
        F: FnOnce(&mut S) -> R,
    {
        let mut db = self.db.lock().map_err(|_| DatabaseError::Poisoned)?;
        Ok(f(&mut db))
    }


    fn read<R, F>(&self, f: F) -> Result<R, DatabaseError>
    where
        F: FnOnce(&S) -> R,
    {
        let db = self.db.lock().map_err(|_| DatabaseError::Poisoned)?;
        Ok(f(&db))
    }
}
