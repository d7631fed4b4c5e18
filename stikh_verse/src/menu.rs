// Interactive text menu for the `stikh` binary.
//
// A `Session` owns the currently loaded dictionary and structure and the
// RNG. `run_menu` drives it from any `BufRead`/`Write` pair (stdin/stdout
// in the binary, in-memory buffers in tests):
//
//   1. Generate a poem
//   2. Choose a dictionary      (by name, resolved through `Settings`)
//   3. Choose a structure       (by name, resolved through `Settings`)
//   4. Quit
//
// A failed reload reports the error and keeps the previous data, so the
// session is always usable. End of input quits like option 4.

use std::io::{self, BufRead, Write};

use stikh_lang::Dictionary;
use stikh_prng::VerseRng;
use tracing::warn;

use crate::config::Settings;
use crate::error::{LoadError, PoemError};
use crate::loader::{load_dictionary, load_template};
use crate::poem::{Poem, generate_poem};
use crate::template::PoemTemplate;

/// Loaded inputs plus the generator state for one interactive run.
pub struct Session {
    settings: Settings,
    dictionary_name: String,
    dictionary: Dictionary,
    structure_name: String,
    template: PoemTemplate,
    rng: VerseRng,
}

impl Session {
    /// Build a session from already-loaded inputs.
    pub fn new(
        settings: Settings,
        dictionary_name: String,
        dictionary: Dictionary,
        structure_name: String,
        template: PoemTemplate,
        rng: VerseRng,
    ) -> Self {
        Session {
            settings,
            dictionary_name,
            dictionary,
            structure_name,
            template,
            rng,
        }
    }

    /// Load the named dictionary and structure from the settings' directories.
    pub fn open(
        settings: Settings,
        dictionary_name: String,
        structure_name: String,
        rng: VerseRng,
    ) -> Result<Self, LoadError> {
        let dictionary = load_dictionary(&settings.dictionary_path(&dictionary_name))?;
        let template = load_template(&settings.structure_path(&structure_name))?;
        Ok(Session::new(
            settings,
            dictionary_name,
            dictionary,
            structure_name,
            template,
            rng,
        ))
    }

    pub fn dictionary_name(&self) -> &str {
        &self.dictionary_name
    }

    pub fn structure_name(&self) -> &str {
        &self.structure_name
    }

    pub fn generate(&mut self) -> Result<Poem, PoemError> {
        generate_poem(
            &self.dictionary,
            &self.template,
            &self.settings.generation,
            &mut self.rng,
        )
    }

    /// Replace the dictionary; on error the current one stays loaded.
    pub fn switch_dictionary(&mut self, name: &str) -> Result<(), LoadError> {
        self.dictionary = load_dictionary(&self.settings.dictionary_path(name))?;
        self.dictionary_name = name.to_string();
        Ok(())
    }

    /// Replace the structure; on error the current one stays loaded.
    pub fn switch_structure(&mut self, name: &str) -> Result<(), LoadError> {
        self.template = load_template(&self.settings.structure_path(name))?;
        self.structure_name = name.to_string();
        Ok(())
    }
}

/// Write a generated poem, or the reason there is none.
pub fn print_poem<W: Write>(result: &Result<Poem, PoemError>, output: &mut W) -> io::Result<()> {
    match result {
        Ok(poem) => writeln!(output, "{poem}"),
        Err(e) => writeln!(output, "No poem: {e}"),
    }
}

fn prompt<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        let items = [
            "Generate a poem".to_string(),
            format!("Choose dictionary | Current: {}.txt", session.dictionary_name()),
            format!("Choose structure | Current: {}.json", session.structure_name()),
            "Quit".to_string(),
        ];
        writeln!(output, "\nMenu:")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(output, "{}. {item}", i + 1)?;
        }

        let Some(choice) = prompt("Choose an action: ", input, output)? else {
            return Ok(());
        };
        match choice.parse::<usize>() {
            Ok(1) => {
                writeln!(output, "\nPoem:\n")?;
                print_poem(&session.generate(), output)?;
            }
            Ok(2) => {
                let Some(name) = prompt("Dictionary name (without .txt): ", input, output)? else {
                    return Ok(());
                };
                if let Err(e) = session.switch_dictionary(&name) {
                    warn!(error = %e, "dictionary reload failed");
                    writeln!(output, "Could not load dictionary: {e}")?;
                }
            }
            Ok(3) => {
                let Some(name) = prompt("Structure name (without .json): ", input, output)? else {
                    return Ok(());
                };
                if let Err(e) = session.switch_structure(&name) {
                    warn!(error = %e, "structure reload failed");
                    writeln!(output, "Could not load structure: {e}")?;
                }
            }
            Ok(4) => {
                writeln!(output, "Shutting down...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice, try again")?,
        }
    }
}
