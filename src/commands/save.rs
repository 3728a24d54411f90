//! Direct save: prepend caller-supplied content to the notebook and commit,
//! with no provider involved.

use crate::commands::learn::{self, Interaction};
use crate::commands::CmdMessage;
use crate::error::{Result, WordbookError};
use crate::git::{format_save_message_at, VcsSink};
use crate::notebook::Notebook;
use chrono::Local;

pub fn run<V: VcsSink>(
    notebook: &Notebook,
    vcs: &V,
    ui: &mut dyn Interaction,
    content: &str,
) -> Result<()> {
    if content.trim().is_empty() {
        return Err(WordbookError::Usage(
            "nothing to save: content is empty".to_string(),
        ));
    }

    notebook.prepend(content)?;
    ui.message(CmdMessage::success(format!(
        "Saved entry to {}",
        notebook.path().display()
    )));
    learn::commit(vcs, &format_save_message_at(Local::now()), ui);
    Ok(())
}
