use super::fs_backend::FsBackend;
use super::slot_store::SlotStore;
use std::path::Path;

pub type FileStore = SlotStore<FsBackend>;

impl FileStore {
    /// A store keeping its slot files under `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        SlotStore::with_backend(FsBackend::new(data_dir))
    }
}
