//! File discovery and per-file linting for `mmlint check`.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use mmlint_lib::config::Config;
use mmlint_lib::rule::{Diagnostic, Rule};
use mmlint_lib::{Language, lint};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Diagnostics for one file, or the reason it could not be read
#[derive(Debug)]
pub struct FileReport {
    pub display_path: String,
    pub outcome: Result<Vec<Diagnostic>, String>,
}

/// Compile glob patterns, skipping (and logging) invalid ones.
pub fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.trim().trim_start_matches("./").trim_end_matches('/');
        if pattern.is_empty() {
            continue;
        }
        match GlobBuilder::new(pattern).literal_separator(false).build() {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => log::warn!("Invalid glob pattern '{pattern}': {e}"),
        }
    }
    builder.build().unwrap_or_else(|e| {
        log::error!("Failed to build globset: {e}");
        GlobSet::empty()
    })
}

/// A path matches when the globset matches it relative to `root`, as given, or by
/// any single component (so `site` excludes every `site` directory).
fn matches_path(globset: &GlobSet, path: &Path, root: &Path) -> bool {
    if globset.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    if globset.is_match(relative) || globset.is_match(path) {
        return true;
    }
    relative
        .components()
        .any(|component| globset.is_match(Path::new(component.as_os_str())))
}

/// Display form of a path: relative to the current directory when possible
pub fn to_display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());
    let shown = relative.strip_prefix("./").unwrap_or(&relative);
    shown.to_string_lossy().to_string()
}

/// Expand the command line paths into the sorted list of files to lint.
///
/// Directories are walked (honouring `.gitignore` when configured) and only Markdown
/// files are kept. Files given explicitly are linted whatever their extension.
/// `exclude` applies to both unless `no_exclude` is set; `include`, when present,
/// restricts what directory walks pick up.
pub fn find_markdown_files(paths: &[String], config: &Config, no_exclude: bool) -> Result<Vec<PathBuf>> {
    let exclude = if no_exclude {
        GlobSet::empty()
    } else {
        build_globset(&config.global.exclude)
    };
    let include = build_globset(&config.global.include);

    let roots: Vec<String> = if paths.is_empty() {
        vec![".".to_string()]
    } else {
        paths.to_vec()
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut files = Vec::new();
    for root in &roots {
        let root_path = Path::new(root);
        if !root_path.exists() {
            anyhow::bail!("Path not found: {root}");
        }

        if root_path.is_file() {
            if matches_path(&exclude, root_path, &cwd) {
                log::debug!("Skipping excluded file {root}");
                continue;
            }
            files.push(root_path.to_path_buf());
            continue;
        }

        let walk_exclude = exclude.clone();
        let walk_root = root_path.to_path_buf();
        let mut builder = WalkBuilder::new(root_path);
        builder
            .hidden(false)
            .git_ignore(config.global.respect_gitignore)
            .git_global(config.global.respect_gitignore)
            .git_exclude(config.global.respect_gitignore)
            .ignore(config.global.respect_gitignore)
            .require_git(false)
            .filter_entry(move |entry| {
                let name = entry.file_name().to_string_lossy();
                name != ".git" && !matches_path(&walk_exclude, entry.path(), &walk_root)
            });

        for entry in builder.build() {
            let entry = entry.with_context(|| format!("Failed to walk {root}"))?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if Language::from_path(path).is_none() {
                continue;
            }
            if !include.is_empty() && !matches_path(&include, path, root_path) {
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    log::debug!("Found {} files to lint", files.len());
    Ok(files)
}

fn lint_file(path: &Path, rules: &[Box<dyn Rule>]) -> FileReport {
    let outcome = fs::read_to_string(path)
        .map(|content| lint(&content, rules))
        .map_err(|e| format!("Failed to read file {}: {e}", path.display()));
    FileReport {
        display_path: to_display_path(path),
        outcome,
    }
}

/// Lint every file; the result keeps the order of `files`.
pub fn process_files(files: &[PathBuf], rules: &[Box<dyn Rule>]) -> Vec<FileReport> {
    #[cfg(feature = "parallel")]
    {
        files.par_iter().map(|path| lint_file(path, rules)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        files.iter().map(|path| lint_file(path, rules)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_walk_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "docs/b.md", "");
        write(root, "docs/a.markdown", "");
        write(root, "docs/notes.txt", "");
        write(root, "site/index.md", "");
        write(root, "page.mdx", "");

        let mut config = Config::default();
        config.global.exclude = vec!["site".to_string()];
        let files = find_markdown_files(&[root.to_string_lossy().to_string()], &config, false).unwrap();
        assert_eq!(relative(root, &files), vec!["docs/a.markdown", "docs/b.md", "page.mdx"]);

        let files = find_markdown_files(&[root.to_string_lossy().to_string()], &config, true).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_gitignore_respected() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, ".gitignore", "build/\n");
        write(root, "build/out.md", "");
        write(root, "index.md", "");

        let mut config = Config::default();
        let files = find_markdown_files(&[root.to_string_lossy().to_string()], &config, false).unwrap();
        assert_eq!(relative(root, &files), vec!["index.md"]);

        config.global.respect_gitignore = false;
        let files = find_markdown_files(&[root.to_string_lossy().to_string()], &config, false).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_include_patterns() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "docs/guide.md", "");
        write(root, "README.md", "");

        let mut config = Config::default();
        config.global.include = vec!["docs/**".to_string()];
        let files = find_markdown_files(&[root.to_string_lossy().to_string()], &config, false).unwrap();
        assert_eq!(relative(root, &files), vec!["docs/guide.md"]);
    }

    #[test]
    fn test_explicit_files_and_missing_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "notes.txt", "");
        let explicit = root.join("notes.txt").to_string_lossy().to_string();

        let files = find_markdown_files(std::slice::from_ref(&explicit), &Config::default(), false).unwrap();
        assert_eq!(files.len(), 1);

        let missing = root.join("missing.md").to_string_lossy().to_string();
        assert!(find_markdown_files(&[missing], &Config::default(), false).is_err());
    }

    #[test]
    fn test_process_files_keeps_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "a.md", "```\nopen");
        write(root, "b.md", "Fine");
        let files = vec![root.join("a.md"), root.join("b.md"), root.join("gone.md")];

        let rules = mmlint_lib::rules::all_rules(&Config::default());
        let reports = process_files(&files, &rules);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].outcome.as_ref().unwrap().len(), 1);
        assert!(reports[1].outcome.as_ref().unwrap().is_empty());
        assert!(reports[2].outcome.is_err());
    }
}
