use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Builds the path of an output file living next to `path`: the file name
/// without its extension, followed by `suffix` and the new `extension`.
///
/// `images/photo.png` with suffix `_decoded` and extension `png` becomes
/// `images/photo_decoded.png`.
pub fn sibling_path(path: &Path, suffix: &str, extension: &str) -> PathBuf {
  let mut name = path.file_stem().map(OsString::from).unwrap_or_default();

  name.push(suffix);
  name.push(".");
  name.push(extension);

  path.with_file_name(name)
}

/// Recursively collects every `.png` file below `dir`, sorted by path.
pub fn find_pngs(dir: &Path) -> io::Result<Vec<PathBuf>> {
  let mut found = Vec::new();
  walk(dir, &mut found)?;
  found.sort();
  Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();

    if path.is_dir() {
      walk(&path, found)?;
    } else if is_png(&path) {
      found.push(path);
    }
  }

  Ok(())
}

fn is_png(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map_or(false, |ext| ext.eq_ignore_ascii_case("png"))
}
