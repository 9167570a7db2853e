use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::{self, File, Metadata};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::wire::{write_bytes, write_padding, write_str, write_u64, ARCHIVE_MAGIC};
use crate::PathFilter;

/// Serialize the tree rooted at `path` into `sink`.
///
/// Regular files, directories and symlinks are supported; any other file
/// type is an error. `filter` is asked about every entry below `path` and
/// excluded entries are skipped together with their subtrees. Symlinks are
/// recorded, never followed.
pub fn dump_path<F, W>(path: &Path, filter: &F, sink: &mut W) -> io::Result<()>
where
    F: PathFilter + ?Sized,
    W: Write + ?Sized,
{
    write_str(sink, ARCHIVE_MAGIC)?;
    dump_node(path, filter, sink)
}

/// Serialize an in-memory byte string as if it were a regular,
/// non-executable file.
pub fn dump_bytes<W: Write + ?Sized>(data: &[u8], sink: &mut W) -> io::Result<()> {
    write_str(sink, ARCHIVE_MAGIC)?;
    write_str(sink, "(")?;
    write_str(sink, "type")?;
    write_str(sink, "regular")?;
    write_str(sink, "contents")?;
    write_bytes(sink, data)?;
    write_str(sink, ")")
}

fn dump_node<F, W>(path: &Path, filter: &F, sink: &mut W) -> io::Result<()>
where
    F: PathFilter + ?Sized,
    W: Write + ?Sized,
{
    let meta = fs::symlink_metadata(path)?;
    let file_type = meta.file_type();

    write_str(sink, "(")?;
    write_str(sink, "type")?;

    if file_type.is_file() {
        write_str(sink, "regular")?;
        if is_executable(&meta) {
            write_str(sink, "executable")?;
            write_str(sink, "")?;
        }
        write_str(sink, "contents")?;
        dump_contents(path, meta.len(), sink)?;
    } else if file_type.is_dir() {
        write_str(sink, "directory")?;

        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort_by(|a, b| name_bytes(a).cmp(&name_bytes(b)));

        for name in names {
            let child = path.join(&name);
            if !filter.include(&child) {
                tracing::trace!(path = %child.display(), "excluded from archive");
                continue;
            }
            write_str(sink, "entry")?;
            write_str(sink, "(")?;
            write_str(sink, "name")?;
            write_bytes(sink, &name_bytes(&name))?;
            write_str(sink, "node")?;
            dump_node(&child, filter, sink)?;
            write_str(sink, ")")?;
        }
    } else if file_type.is_symlink() {
        let target = fs::read_link(path)?;
        write_str(sink, "symlink")?;
        write_str(sink, "target")?;
        write_bytes(sink, &name_bytes(target.as_os_str()))?;
    } else {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("file '{}' has an unsupported type", path.display()),
        ));
    }

    write_str(sink, ")")
}

/// Stream `size` bytes of file content, framed like any other string.
fn dump_contents<W: Write + ?Sized>(path: &Path, size: u64, sink: &mut W) -> io::Result<()> {
    write_u64(sink, size)?;
    let mut file = File::open(path)?.take(size);
    let copied = io::copy(&mut file, sink)?;
    if copied != size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "file '{}' shrank while being archived ({copied} of {size} bytes)",
                path.display()
            ),
        ));
    }
    write_padding(sink, size)
}

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &Metadata) -> bool {
    false
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
