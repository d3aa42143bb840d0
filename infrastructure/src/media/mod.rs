//! Local media adapters: photo reading and generated-media storage.

mod image_reader;
mod local_store;

pub use image_reader::LocalImageReader;
pub use local_store::LocalMediaStore;
