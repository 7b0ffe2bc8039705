//! Thread-shared collection handle
//!
//! [`CarCollection`] itself is single-owner. When several threads need the same
//! inventory, wrap it in a [`SharedCollection`]: writes hold the write lock for
//! the whole operation, reads hold the read lock, so no reader can observe a
//! half-applied mutation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::apply::Applied;
use crate::collection::CarCollection;
use crate::commands::Command;
use crate::errors::{CarLotError, Result};
use crate::model::{JoinedVehicle, VehicleProps};

/// Cloneable, lock-protected handle to one [`CarCollection`]
#[derive(Debug, Clone, Default)]
pub struct SharedCollection {
    inner: Arc<RwLock<CarCollection>>,
}

impl SharedCollection {
    pub fn new(collection: CarCollection) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collection)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CarCollection>> {
        self.inner.read().map_err(|e| CarLotError::LockPoisoned {
            message: e.to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CarCollection>> {
        self.inner.write().map_err(|e| CarLotError::LockPoisoned {
            message: e.to_string(),
        })
    }

    /// See [`CarCollection::list_all`]
    ///
    /// # Errors
    ///
    /// `LockPoisoned` if a writer panicked while holding the lock.
    pub fn list_all(&self) -> Result<Vec<JoinedVehicle>> {
        Ok(self.read()?.list_all())
    }

    /// See [`CarCollection::list_by_brand`]
    ///
    /// # Errors
    ///
    /// `LockPoisoned` if a writer panicked while holding the lock.
    pub fn list_by_brand(&self, brand_id: &str) -> Result<Vec<JoinedVehicle>> {
        Ok(self.read()?.list_by_brand(brand_id))
    }

    /// See [`CarCollection::add`]
    ///
    /// # Errors
    ///
    /// `InvalidReference`, or `LockPoisoned`.
    pub fn add(&self, props: VehicleProps) -> Result<String> {
        self.write()?.add(props)
    }

    /// See [`CarCollection::update`]
    ///
    /// # Errors
    ///
    /// `VehicleNotFound`/`ModelNotFound`/`BrandNotFound`, or `LockPoisoned`.
    pub fn update(&self, car_id: &str, props: VehicleProps) -> Result<()> {
        self.write()?.update(car_id, props)
    }

    /// See [`CarCollection::delete_car_by_id`]
    ///
    /// # Errors
    ///
    /// `LockPoisoned` only; a missing ID is still a no-op.
    pub fn delete_car_by_id(&self, car_id: &str) -> Result<bool> {
        Ok(self.write()?.delete_car_by_id(car_id))
    }

    /// See [`CarCollection::execute`]
    ///
    /// # Errors
    ///
    /// The command's own error, or `LockPoisoned`.
    pub fn execute(&self, cmd: Command) -> Result<Applied> {
        self.write()?.execute(cmd)
    }

    /// Clone out the current collection state
    ///
    /// # Errors
    ///
    /// `LockPoisoned` if a writer panicked while holding the lock.
    pub fn snapshot(&self) -> Result<CarCollection> {
        Ok(self.read()?.clone())
    }
}
