//! Filesystem infrastructure — host file probes.

use std::path::Path;

use crate::application::ports::HostFiles;

/// Production filesystem implementation of `HostFiles`.
pub struct LocalFs;

impl HostFiles for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
