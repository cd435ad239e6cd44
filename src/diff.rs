//! Unified diff detection
//!
//! Line classification and hunk header parsing used by the renderer to plan
//! per-line backgrounds and line numbers, plus language inference from
//! patch file headers.

use tracing::debug;

use crate::syntax::LanguageId;

/// Role of a line inside a unified diff
///
/// Lines that match none of these are context lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffLineKind {
    Added,
    Removed,
    FileHeader,
    HunkHeader,
    Meta,
}

impl DiffLineKind {
    /// Header and meta lines, as opposed to code lines
    pub fn is_header(self) -> bool {
        matches!(self, DiffLineKind::FileHeader | DiffLineKind::HunkHeader | DiffLineKind::Meta)
    }
}

const META_PREFIXES: [&str; 8] = [
    "diff --git ",
    "index ",
    "new file mode ",
    "deleted file mode ",
    "rename from ",
    "rename to ",
    "Binary files ",
    "\\ No newline at end of file",
];

/// Start lines of the old and new file from a `@@ -a,b +c,d @@` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkStart {
    pub old_start: usize,
    pub new_start: usize,
}

/// Stateless unified diff classifier
pub struct DiffDetector;

impl DiffDetector {
    /// Whether any line looks like a patch header
    pub fn looks_like_patch(text: &str) -> bool {
        split_lines(text).any(|line| {
            let line = trim_cr(line);
            line.starts_with("diff --git ")
                || line.starts_with("@@")
                || line.starts_with("--- ")
                || line.starts_with("+++ ")
        })
    }

    /// Classify one line (without its newline)
    ///
    /// Meta prefixes win over hunk headers, hunk headers over file headers,
    /// and file headers over added/removed, so `+++ b/x` is never `Added`.
    pub fn classify(line: &str) -> Option<DiffLineKind> {
        let line = trim_cr(line);

        if META_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            return Some(DiffLineKind::Meta);
        }
        if line.starts_with("@@") {
            return Some(DiffLineKind::HunkHeader);
        }
        if line.starts_with("--- ") || line.starts_with("+++ ") {
            return Some(DiffLineKind::FileHeader);
        }
        if line.starts_with('+') {
            return Some(DiffLineKind::Added);
        }
        if line.starts_with('-') {
            return Some(DiffLineKind::Removed);
        }
        None
    }

    /// Parse the line starts out of a hunk header
    ///
    /// Counts are optional (`@@ -3 +3 @@` is valid). Returns `None` for
    /// anything that is not a well-formed header.
    pub fn parse_hunk_header(line: &str) -> Option<HunkStart> {
        let rest = trim_cr(line).strip_prefix("@@")?.trim_start();
        let mut fields = rest.split_whitespace();
        let old = fields.next()?.strip_prefix('-')?;
        let new = fields.next()?.strip_prefix('+')?;

        let start = |range: &str| range.split(',').next()?.parse::<usize>().ok();
        Some(HunkStart {
            old_start: start(old)?,
            new_start: start(new)?,
        })
    }

    /// Best-effort language of the patched file
    ///
    /// Prefers the `+++` header, then `---`, then `diff --git a/x b/y`.
    /// `/dev/null` sides are skipped.
    pub fn infer_language(text: &str) -> Option<LanguageId> {
        let mut old_path = None;
        let mut git_path = None;

        for line in split_lines(text) {
            let line = trim_cr(line);
            if let Some(path) = line.strip_prefix("+++ ") {
                if let Some(id) = header_path(path).and_then(LanguageId::from_file_name) {
                    debug!(language = %id, "inferred diff language from new file header");
                    return Some(id);
                }
            } else if let Some(path) = line.strip_prefix("--- ") {
                old_path = old_path.or_else(|| header_path(path));
            } else if let Some(paths) = line.strip_prefix("diff --git ") {
                git_path = git_path.or_else(|| paths.rsplit(' ').next().map(strip_side_prefix));
            }
        }

        let id = old_path.or(git_path).and_then(LanguageId::from_file_name)?;
        debug!(language = %id, "inferred diff language from old file header");
        Some(id)
    }
}

/// Path of a `---`/`+++` header with the side prefix and timestamp removed
fn header_path(rest: &str) -> Option<&str> {
    let path = rest.split('\t').next().unwrap_or(rest).trim();
    if path.is_empty() || path == "/dev/null" {
        return None;
    }
    Some(strip_side_prefix(path))
}

fn strip_side_prefix(path: &str) -> &str {
    path.strip_prefix("a/").or_else(|| path.strip_prefix("b/")).unwrap_or(path)
}

fn trim_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split on `\n`, always yielding a final (possibly empty) piece
///
/// `"a\n"` yields `"a"` and `""`; the empty string yields one empty line.
pub fn split_lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}
