//! Small text helpers for console output

use console::Style;

/// Captions longer than this are cut in progress lines
const CAPTION_PREVIEW_CHARS: usize = 60;

/// Shorten a caption for display, on a char boundary
pub fn caption_preview(caption: &str) -> String {
    if caption.chars().count() <= CAPTION_PREVIEW_CHARS {
        return caption.to_string();
    }
    let cut: String = caption.chars().take(CAPTION_PREVIEW_CHARS).collect();
    format!("{cut}...")
}

/// `[DRY RUN] ` marker for lines describing writes that were skipped
pub fn dry_run_prefix(dry_run: bool) -> String {
    if dry_run {
        format!("{} ", Style::new().magenta().bold().apply_to("[DRY RUN]"))
    } else {
        String::new()
    }
}
