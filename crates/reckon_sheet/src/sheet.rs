//! The entry list and its recalculation pass.

use reckon_foundation::Result;
use reckon_language::{Catalog, EvalContext, eval_entry};

use crate::entry::Entry;
use crate::rpn::{RpnRun, try_resolve};

/// Variable holding the previous entry's answer.
pub const ANS: &str = "ans";

/// The calculation list: ordered entries, one selection, one catalog.
///
/// Every recalculation pass re-derives everything from the entry texts:
/// a fresh [`EvalContext`], a fresh resolver probe at the selection. No
/// evaluation state survives between passes.
#[derive(Debug)]
pub struct Sheet {
    catalog: Catalog,
    entries: Vec<Entry>,
    selected: usize,
}

impl Sheet {
    /// Creates a sheet over the builtin catalog, holding one blank entry.
    ///
    /// # Errors
    /// Returns a definition error if the builtin table fails to build.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(Catalog::with_builtins()?))
    }

    /// Creates a sheet over an explicit catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            entries: vec![Entry::default()],
            selected: 0,
        }
    }

    /// The entries, in list order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry at `index`, if it exists.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Mutable access to the entry at `index`.
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// The catalog this sheet evaluates against.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the selected entry.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the selection, clamped to the list.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.entries.len().saturating_sub(1));
    }

    /// Appends an entry and selects it. Returns its index.
    pub fn push(&mut self, text: impl Into<String>) -> usize {
        self.entries.push(Entry::new(text));
        self.selected = self.entries.len() - 1;
        self.selected
    }

    /// Replaces the text of the entry at `index`.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_text(text);
        }
    }

    /// Removes the entry at `index`, keeping at least one entry around.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
        if self.entries.is_empty() {
            self.entries.push(Entry::default());
        }
        self.select(self.selected.min(index));
    }

    /// Clears the list back to one blank entry.
    pub fn clear(&mut self) {
        self.entries = vec![Entry::default()];
        self.selected = 0;
    }

    /// Cycles the selected entry's display radix.
    pub fn cycle_radix(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.set_radix(entry.radix().next());
        }
    }

    /// Recalculates every entry with an entropy-seeded context.
    pub fn recalc(&mut self) {
        let run = try_resolve(&self.entries, self.selected);
        let mut ctx = EvalContext::new(&self.catalog);
        recalc_entries(&mut self.entries, run.as_ref(), &mut ctx);
    }

    /// Recalculates every entry with a deterministic RNG stream.
    pub fn recalc_seeded(&mut self, seed: u64) {
        let run = try_resolve(&self.entries, self.selected);
        let mut ctx = EvalContext::with_seed(&self.catalog, seed);
        recalc_entries(&mut self.entries, run.as_ref(), &mut ctx);
    }

    /// Commits the stack-entry run at the selection, if one resolved.
    ///
    /// The operand entries are deleted, the symbol entry collapses into the
    /// first operand's slot carrying the resolved text, and the selection
    /// lands on it. An errored or absent run commits nothing.
    pub fn commit_rpn(&mut self) -> bool {
        let Some(run) = try_resolve(&self.entries, self.selected) else {
            return false;
        };
        let Some(resolved) = run.resolved().map(str::to_string) else {
            return false;
        };
        self.entries.drain(run.start()..run.end());
        self.entries[run.start()].set_text(resolved);
        self.selected = run.start();
        self.recalc();
        true
    }
}

/// One pass over the whole list: operand entries get markers, the symbol
/// entry evaluates its resolved text, everything else evaluates its own
/// text. Each answer becomes `ans` for the entries below it; a failed or
/// blank entry undefines `ans` instead.
fn recalc_entries(entries: &mut [Entry], run: Option<&RpnRun>, ctx: &mut EvalContext<'_>) {
    for i in 0..entries.len() {
        if run.is_some_and(|r| r.start() <= i && i < r.end()) {
            entries[i].set_outcome(None, Some("(RPN operand)".to_string()));
            continue;
        }
        let text = entries[i].text().trim().to_string();
        let result = match run {
            Some(r) if r.end() == i => match r.outcome() {
                Ok(resolved) => eval_entry(resolved, ctx),
                Err(e) => Err(e.clone()),
            },
            _ if text.is_empty() => {
                entries[i].set_outcome(None, None);
                ctx.undefine(ANS);
                continue;
            }
            _ => eval_entry(&text, ctx),
        };
        match result {
            Ok(value) => {
                let rendered = entries[i].radix().format(&value);
                entries[i].set_outcome(Some(rendered), None);
                ctx.define(ANS, value);
            }
            Err(e) => {
                entries[i].set_outcome(None, Some(format!("? {e}")));
                ctx.undefine(ANS);
            }
        }
    }
}
