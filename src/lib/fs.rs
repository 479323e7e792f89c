use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replaces `path` with `contents` by writing a temp file next to it and
/// renaming it into place, so readers never see a half-written file.
pub fn write_atomic<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
	let path = path.as_ref();
	let parent = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let mut temp_file = NamedTempFile::new_in(parent)?;
	temp_file.write_all(contents.as_ref())?;
	temp_file.as_file().sync_all()?;
	temp_file.persist(path).map_err(|e| e.error)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replaces_existing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("file.json");

		write_atomic(&path, "first").unwrap();
		write_atomic(&path, "second").unwrap();

		assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
		assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
	}
}
