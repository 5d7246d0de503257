use super::{Donor, DonorId};

use indexmap::IndexMap;
use std::sync::Arc;

/// Resolves portable donor identifiers against a live model graph.
pub trait DonorResolver {
    fn resolve(&self, id: &DonorId) -> Option<Arc<Donor>>;
}

impl<F> DonorResolver for F
where
    F: Fn(&DonorId) -> Option<Arc<Donor>>,
{
    fn resolve(&self, id: &DonorId) -> Option<Arc<Donor>> {
        self(id)
    }
}

/// An in-memory model graph: the set of donors known to the application.
#[derive(Debug, Default, Clone)]
pub struct DonorSet {
    donors: IndexMap<DonorId, Arc<Donor>>,
}

impl DonorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a donor, replacing any donor previously registered under the same
    /// identifier. Returns the shared handle.
    pub fn insert(&mut self, donor: Donor) -> Arc<Donor> {
        let donor = Arc::new(donor);
        self.donors.insert(donor.id.clone(), donor.clone());
        donor
    }

    pub fn remove(&mut self, id: &DonorId) -> Option<Arc<Donor>> {
        self.donors.shift_remove(id)
    }

    pub fn get(&self, id: &DonorId) -> Option<&Arc<Donor>> {
        self.donors.get(id)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Donor>> + '_ {
        self.donors.values()
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}

impl DonorResolver for DonorSet {
    fn resolve(&self, id: &DonorId) -> Option<Arc<Donor>> {
        self.donors.get(id).cloned()
    }
}

