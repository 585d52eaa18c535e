//! Plain-text export of a drafted document: save to disk or hand to the
//! platform clipboard. No format beyond plain text.

use std::io;
use std::path::{Path, PathBuf};

use crate::report::DraftedDocument;

/// The document as plain text: title, blank line, content.
pub fn draft_plain_text(doc: &DraftedDocument) -> String {
    format!("{}\n\n{}", doc.title, doc.content)
}

/// File name derived from the title: non-alphanumerics collapse to single
/// dashes, lowercase, `.txt` extension. Untitled drafts get a fixed name.
pub fn draft_file_name(doc: &DraftedDocument) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for c in doc.title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "drafted-document.txt".to_string()
    } else {
        format!("{}.txt", slug)
    }
}

/// Writes the draft into `dir` and returns the path.
pub fn save_draft(doc: &DraftedDocument, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(draft_file_name(doc));
    std::fs::write(&path, draft_plain_text(doc))?;
    Ok(path)
}

/// Platform clipboard seam; the shell provides the real sink.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str);
}

/// Copies the draft's content to the clipboard (content only, matching the
/// product's copy button).
pub fn copy_draft(doc: &DraftedDocument, sink: &mut dyn ClipboardSink) {
    sink.set_text(&doc.content);
}
