use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognised as post bodies.
pub const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Post not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a post body from the content directory
pub fn read_post(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Scan for post files in the content directory, as sorted paths relative to it
pub fn scan_posts(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;

    let mut posts: Vec<RelativePathBuf> = files
        .iter()
        .filter_map(|path| path.strip_prefix(content_root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect();
    posts.sort();
    log::debug!("found {} posts under {}", posts.len(), content_root.display());
    Ok(posts)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && POST_EXTENSIONS.iter().any(|known| ext == *known)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
