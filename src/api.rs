//! # API Facade
//!
//! Single entry point for wordbook operations, generic over the two
//! collaborator seams:
//!
//! - `P: ExplanationProvider` — production [`GeminiClient`], scripted
//!   doubles in tests
//! - `V: VcsSink` — production [`GitSink`], recording doubles in tests
//!
//! The facade holds no logic of its own: it owns the collaborators and
//! dispatches into `commands::*`. Terminal interaction is passed in per
//! call, never owned here.
//!
//! [`GeminiClient`]: crate::provider::gemini::GeminiClient
//! [`GitSink`]: crate::git::GitSink

use crate::commands::{self, learn::Interaction, LearnOutcome};
use crate::error::Result;
use crate::git::VcsSink;
use crate::model::{Explanation, Word};
use crate::notebook::Notebook;
use crate::provider::ExplanationProvider;

pub struct WordbookApi<P: ExplanationProvider, V: VcsSink> {
    provider: P,
    notebook: Notebook,
    vcs: V,
}

impl<P: ExplanationProvider, V: VcsSink> WordbookApi<P, V> {
    pub fn new(provider: P, notebook: Notebook, vcs: V) -> Self {
        Self {
            provider,
            notebook,
            vcs,
        }
    }

    /// Run the full interaction loop for one word.
    pub fn learn(&self, ui: &mut dyn Interaction, input: &str) -> Result<LearnOutcome> {
        commands::learn::run(&self.provider, &self.notebook, &self.vcs, ui, input)
    }

    /// Validate and fetch one explanation without any interaction or
    /// persistence (the `--raw` path).
    pub fn explain_raw(&self, input: &str) -> Result<Explanation> {
        let word = Word::parse(input)?;
        commands::learn::fetch(&self.provider, &word)
    }

    /// Prepend arbitrary content to the notebook and commit it.
    pub fn save_entry(&self, ui: &mut dyn Interaction, content: &str) -> Result<()> {
        commands::save::run(&self.notebook, &self.vcs, ui, content)
    }

    pub fn test_connection(&self) -> Result<bool> {
        self.provider.test_connection()
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }
}
