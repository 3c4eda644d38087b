//! Shared display formatting helpers.
//!
//! Small, pure utilities used while computing view models. Display policy that
//! belongs to the data (as opposed to colors or layout, which belong to the
//! shell's toolkit) lives here.

/// Wraps slave-link text in the fixed preformatted envelope the preview pane
/// expects.
///
/// This is the one formatting rule the dialogs own: slave text is multi-line
/// and column-aligned, so it is always rendered preformatted.
///
/// # Examples
///
/// ```
/// use alternatives_ui::ui::helpers::preformatted;
///
/// assert_eq!(
///     preformatted("editor.1.gz /usr/share/man/man1/ed.1.gz"),
///     "<pre>editor.1.gz /usr/share/man/man1/ed.1.gz</pre>",
/// );
/// ```
#[must_use]
pub fn preformatted(text: &str) -> String {
    format!("<pre>{text}</pre>")
}
