//! Test doubles shared by unit tests.

mod memory_filesystem;

pub(crate) use memory_filesystem::MemoryFilesystem;
