//! The main REPL implementation.
//!
//! Each input line becomes a list entry; the whole list recalculates after
//! every edit, exactly like the windowed calculator list this mirrors. A
//! line of bare operator symbols triggers the stack-entry resolver and, on
//! success, immediately commits the fold.

use std::io::{self, Write};

use reckon_foundation::{Error, Result};
use reckon_sheet::Sheet;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The calculation list.
    sheet: Sheet,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the builtin catalog fails to
    /// initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Self::with_editor(editor)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the builtin catalog fails to build.
    pub fn with_editor(editor: E) -> Result<Self> {
        let mut repl = Self {
            editor,
            sheet: Sheet::new()?,
            show_banner: true,
            prompt: "= ".to_string(),
        };
        repl.refresh_keywords();
        Ok(repl)
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the sheet.
    #[must_use]
    pub const fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Returns a mutable reference to the sheet.
    pub fn sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheet
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim().to_string();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&trimmed);
                    match self.handle_line(&trimmed) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one input line. Returns `Ok(false)` to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if a `:save` or `:load` command fails; evaluation
    /// errors are rendered per entry, never propagated.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command);
        }

        self.sheet.push(line);
        self.sheet.recalc();
        self.sheet.commit_rpn();
        self.refresh_keywords();
        self.print_entry(self.sheet.selected());
        Ok(true)
    }

    fn handle_command(&mut self, command: &str) -> Result<bool> {
        let (name, arg) = match command.split_once(' ') {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "q" | "quit" => return Ok(false),
            "help" => print_help(),
            "list" => self.print_list(),
            "clear" => {
                self.sheet.clear();
                self.refresh_keywords();
            }
            "del" => {
                let index = arg
                    .parse::<usize>()
                    .map_err(|_| Error::domain(format!("invalid entry index: {arg}")))?;
                self.sheet.remove(index);
                self.sheet.recalc();
            }
            "radix" => {
                self.sheet.cycle_radix();
                self.sheet.recalc();
                self.print_entry(self.sheet.selected());
            }
            "save" => {
                serialize::save_to_file(&serialize::Snapshot::of(&self.sheet), arg)?;
                println!("saved {arg}");
            }
            "load" => {
                let snapshot = serialize::load_from_file(arg)?;
                snapshot.restore(&mut self.sheet);
                self.sheet.recalc();
                self.refresh_keywords();
                self.print_list();
            }
            other => println!("unknown command :{other} (try :help)"),
        }
        Ok(true)
    }

    /// Pushes the current function and variable names into completion.
    fn refresh_keywords(&mut self) {
        let mut keywords: Vec<String> = self
            .sheet
            .catalog()
            .iter(false)
            .map(|def| def.name().to_string())
            .collect();
        keywords.push("ans".to_string());
        keywords.push("true".to_string());
        keywords.push("false".to_string());
        keywords.sort();
        keywords.dedup();
        self.editor.set_keywords(keywords);
    }

    fn print_entry(&self, index: usize) {
        let Some(entry) = self.sheet.entry(index) else {
            return;
        };
        if let Some(answer) = entry.answer() {
            println!("\x1b[1m{answer}\x1b[0m");
        } else if let Some(hint) = entry.hint() {
            eprintln!("\x1b[31m{hint}\x1b[0m");
        }
    }

    fn print_list(&self) {
        for (i, entry) in self.sheet.entries().iter().enumerate() {
            let marker = if i == self.sheet.selected() { ">" } else { " " };
            let answer = entry.answer().unwrap_or("");
            let hint = entry.hint().unwrap_or("");
            println!("{marker}{i:3}  {:<24} {answer}{hint}", entry.text());
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Reckon v{}", env!("CARGO_PKG_VERSION"));
        println!("Type expressions to evaluate; a line of operators folds the list above it.");
        println!("Use :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn print_help() {
    println!(
        "\x1b[1mCOMMANDS:\x1b[0m
    :list          Show all entries with answers
    :del N         Delete entry N
    :clear         Reset to one blank entry
    :radix         Cycle the selected entry's radix (dec/hex/bin/oct)
    :save PATH     Save the sheet to a snapshot file
    :load PATH     Load a snapshot file
    :help          Show this help
    :quit          Exit

Anything else is an entry. `ans` names the previous answer. Entering
only operator symbols (e.g. `+` after two entries) folds the entries
above into one infix expression."
    );
}
