mod package_filesystem;

pub use package_filesystem::{AsyncPackageFilesystemPort, PackageFilesystemPort};
