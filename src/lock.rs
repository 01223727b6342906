//! Read-only toggling for installed files.
//!
//! Windows uses the read-only attribute. On Unix the write bits stand in for it:
//! locking clears every write bit, unlocking restores the owner's.

use std::fs;
use std::io;
use std::path::Path;

pub fn set_read_only(path: &Path, read_only: bool) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    apply(&mut permissions, read_only);
    fs::set_permissions(path, permissions)
}

pub fn is_read_only(path: &Path) -> io::Result<bool> {
    Ok(fs::metadata(path)?.permissions().readonly())
}

#[cfg(unix)]
fn apply(permissions: &mut fs::Permissions, read_only: bool) {
    use std::os::unix::fs::PermissionsExt;

    let mode = permissions.mode();
    let mode = if read_only {
        mode & !0o222
    } else {
        mode | 0o200
    };
    permissions.set_mode(mode);
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn apply(permissions: &mut fs::Permissions, read_only: bool) {
    permissions.set_readonly(read_only);
}
