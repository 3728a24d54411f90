//! The interaction loop: fetch an explanation, present it, act on the user's
//! choice until the word is saved or skipped.
//!
//! All terminal I/O goes through the [`Interaction`] trait, so the loop runs
//! unchanged against a real terminal or a scripted test double.

use crate::commands::{CmdMessage, LearnOutcome};
use crate::error::{Result, WordbookError};
use crate::git::{self, PushReport, VcsSink};
use crate::model::{Explanation, Word};
use crate::notebook::Notebook;
use crate::provider::ExplanationProvider;
use std::str::FromStr;

/// Lines shown by the preview action before truncating.
pub const PREVIEW_LINES: usize = 10;

/// One user decision at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Regenerate,
    Preview,
    Skip,
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "save" => Ok(Action::Save),
            "r" | "regenerate" => Ok(Action::Regenerate),
            "p" | "preview" => Ok(Action::Preview),
            "k" | "skip" => Ok(Action::Skip),
            _ => Err(()),
        }
    }
}

/// Terminal boundary for the interaction loop.
pub trait Interaction {
    /// Show a full explanation.
    fn present(&mut self, explanation: &Explanation);

    /// Show a truncated preview: the visible lines and how many are hidden.
    fn preview(&mut self, shown: &[&str], hidden: usize);

    /// Read one raw action token from the user.
    fn prompt_action(&mut self) -> Result<String>;

    /// Emit a status message.
    fn message(&mut self, message: CmdMessage);
}

pub fn run<P: ExplanationProvider, V: VcsSink>(
    provider: &P,
    notebook: &Notebook,
    vcs: &V,
    ui: &mut dyn Interaction,
    input: &str,
) -> Result<LearnOutcome> {
    let word = Word::parse(input)?;

    ui.message(CmdMessage::info(format!("Processing word: {}", word)));
    let mut explanation = fetch(provider, &word)?;
    ui.present(&explanation);

    loop {
        let token = ui.prompt_action()?;
        let Ok(action) = token.parse::<Action>() else {
            ui.message(CmdMessage::warning(format!(
                "Unrecognized choice '{}'. Use s(ave), r(egenerate), p(review) or k to skip.",
                token.trim()
            )));
            continue;
        };

        match action {
            Action::Regenerate => {
                ui.message(CmdMessage::info("Regenerating explanation..."));
                explanation = fetch(provider, &word)?;
                ui.present(&explanation);
            }
            Action::Preview => {
                let (shown, hidden) = explanation.preview(PREVIEW_LINES);
                ui.preview(&shown, hidden);
            }
            Action::Skip => {
                ui.message(CmdMessage::info(format!(
                    "Skipped '{}'; nothing was saved.",
                    word
                )));
                return Ok(LearnOutcome::Skipped);
            }
            Action::Save => {
                notebook.prepend(explanation.as_str())?;
                ui.message(CmdMessage::success(format!(
                    "Saved '{}' to {}",
                    word,
                    notebook.path().display()
                )));
                commit(vcs, &git::format_commit_message(word.as_str()), ui);
                return Ok(LearnOutcome::Saved);
            }
        }
    }
}

/// Fetch one explanation. Initial fetch and regenerate share this path, so a
/// blank response is rejected identically in both.
pub(crate) fn fetch<P: ExplanationProvider>(provider: &P, word: &Word) -> Result<Explanation> {
    let explanation = Explanation::new(provider.explain(&word.lowercased())?);
    if explanation.is_blank() {
        return Err(WordbookError::Provider(format!(
            "provider returned a blank explanation for '{}'",
            word
        )));
    }
    Ok(explanation)
}

/// Commit/push failures never undo the notebook write; they are reported as
/// a warning and the operation still counts as a success.
pub(crate) fn commit<V: VcsSink>(vcs: &V, message: &str, ui: &mut dyn Interaction) {
    match vcs.commit_and_push(message) {
        Ok(PushReport::Committed) => {
            ui.message(CmdMessage::success("Changes committed to local repository"));
        }
        Ok(PushReport::CommittedAndPushed) => {
            ui.message(CmdMessage::success(
                "Changes committed and pushed to remote repository",
            ));
        }
        Err(e) => {
            ui.message(CmdMessage::warning(format!(
                "Could not commit/push changes: {}",
                e
            )));
        }
    }
}
