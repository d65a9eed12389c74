use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::descriptor::ThemeDescriptor;

/// Result of scanning content files for class-name candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Files that matched a content glob, relative to the scan root.
    pub files: Vec<PathBuf>,
    /// Every distinct candidate token found in those files.
    pub candidates: BTreeSet<String>,
}

/// Walks the descriptor's content globs below a root directory.
pub struct Scanner<'a> {
    root: PathBuf,
    descriptor: &'a ThemeDescriptor,
}

impl<'a> Scanner<'a> {
    pub fn new(root: impl Into<PathBuf>, descriptor: &'a ThemeDescriptor) -> Self {
        Self {
            root: root.into(),
            descriptor,
        }
    }

    /// Files under the root matched by any content glob, sorted.
    ///
    /// Only each glob's literal base directory is walked; a base that does
    /// not exist contributes nothing.
    pub fn files(&self) -> Vec<PathBuf> {
        let matcher = self.descriptor.content_matcher();
        let mut files = BTreeSet::new();

        for pattern in self.descriptor.content_globs() {
            let base = self.root.join(pattern.base());
            if !base.exists() {
                debug!(glob = %pattern, base = %base.display(), "content base missing, skipping");
                continue;
            }

            for entry in WalkDir::new(&base).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!(error = %err, "skipping unreadable content entry");
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                    continue;
                };
                let relative = relative
                    .strip_prefix(".")
                    .unwrap_or(relative)
                    .to_path_buf();
                if matcher.is_match(&relative) {
                    files.insert(relative);
                }
            }
        }

        files.into_iter().collect()
    }

    pub fn scan(&self) -> ScanReport {
        let files = self.files();
        let mut candidates = BTreeSet::new();

        for file in &files {
            let path = self.root.join(file);
            match std::fs::read(&path) {
                Ok(bytes) => extract_candidates(&String::from_utf8_lossy(&bytes), &mut candidates),
                Err(err) => warn!(path = %path.display(), error = %err, "skipping unreadable file"),
            }
        }

        debug!(
            root = %self.root.display(),
            files = files.len(),
            candidates = candidates.len(),
            "content scan finished"
        );
        ScanReport { files, candidates }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_class_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '/' | '.' | '[' | ']' | '%' | '#')
}

/// Collect every maximal run of class-name characters in `text`.
///
/// Identifiers, paths and prose words come through too; the generator
/// ignores candidates it cannot resolve.
pub fn extract_candidates(text: &str, out: &mut BTreeSet<String>) {
    for run in text.split(|ch: char| !is_class_char(ch)) {
        let run = run.trim_end_matches(['.', ':']);
        if run.chars().any(|ch| ch.is_ascii_alphanumeric()) {
            out.insert(run.to_string());
        }
    }
}
