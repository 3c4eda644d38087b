//! Help text for the listing dialog.
//!
//! The prose shown when the shell executes
//! [`Action::ShowHelp`](crate::app::Action::ShowHelp). It uses the same light
//! rich-text markup as the slave-link preview pane, so any pane that can
//! render the preview can render the help.

/// Returns the help text for the alternatives listing dialog.
#[must_use]
pub fn help_text() -> &'static str {
    "<p>Alternatives are used to manage different versions of an application. \
     For example you can have different versions of java installed on your \
     system, and use the latest one when \"java\" is called.</p>\
     <p>Every alternative has a status, it can be automatic or manual. In \
     <b>automatic mode</b> the system sets the choice with the highest \
     priority. Note that the <b>priority</b> is set by the package creators \
     trying to provide reasonable defaults. The <b>manual mode</b> is set \
     when the user selects a choice manually.</p>\
     <p>To change the current choice of an alternative, select the \
     alternative, press the <b>edit</b> button, then select the desired \
     choice in the table and press the <b>set choice</b> button. If you want \
     the alternative in automatic mode, just press the <b>set automatic \
     mode</b> button in the edit dialog.</p>\
     <p>Furthermore every choice has its own <b>slaves</b>; these will be \
     applied on the system when the choice is selected.</p>\
     <p>Let's see an example from the man pages. We have an alternative \
     \"editor\" that has two choices. The first choice \"/bin/ed\" with the \
     slave:</p>\
     <pre>  editor.1.gz /usr/share/man/man1/ed.1.gz</pre>\
     <p>Another choice \"/usr/bin/vim\" with the following slaves:</p>\
     <pre>  editor.1.gz /usr/share/man/man1/vim.1.gz\n\
     \x20 editor.fr.1.gz /usr/share/man/fr/man1/vim.1.gz\n\
     \x20 editor.it.1.gz /usr/share/man/it/man1/vim.1.gz\n</pre>\
     <p>In this case, selecting the second choice modifies all of its slaves, \
     creating the ones that do not exist yet. Setting \"/bin/ed\" afterwards \
     modifies the slave \"editor.1.gz\" and removes the others.</p>"
}
