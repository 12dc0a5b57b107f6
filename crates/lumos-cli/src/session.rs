//! Line-driven editing session.
//!
//! Each input line is one user action. Every change re-renders the preview
//! page through the delivery collaborator, so a browser pointed at the
//! output directory always shows the current tokens.

use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use lumos_core::{Field, FontFamily};
use lumos_export::{export_stylesheet, generate, FileDelivery};
use lumos_session::ConfigStore;

use crate::commands::{self, write_preview};

const HELP: &str = "\
commands:
  set KEY VALUE     change a token (see `fields`)
  get KEY           print a token
  font NAME         change the font family
  grid on|off       toggle the 12-column grid overlay
  dark on|off       toggle dark mode
  show              print every token as JSON
  css               print the generated stylesheet
  export            write lumos-custom-styles.css
  preview           write lumos-preview.html
  fields | fonts    list tokens or fonts
  help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

pub struct Session {
    store: ConfigStore,
    delivery: Rc<dyn FileDelivery>,
}

impl Session {
    /// Wrap a store and subscribe the live preview to it.
    pub fn new(mut store: ConfigStore, delivery: Rc<dyn FileDelivery>) -> Self {
        let live = Rc::clone(&delivery);
        let loader = Arc::clone(store.loader());
        store.subscribe(move |config, field| {
            if let Err(e) = write_preview(config, &loader.loaded_stylesheets(), live.as_ref()) {
                tracing::error!(%field, error = %e, "live preview failed");
            }
        });
        Self { store, delivery }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Render the initial preview, then execute lines until `quit` or EOF.
    /// Command errors are reported on `out` and the session carries on.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> eyre::Result<()> {
        self.write_preview(out)?;
        writeln!(out, "type `help` for commands")?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line, out) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Continue) => {}
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> eyre::Result<Outcome> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command {
            "" => {}
            "set" => {
                let (key, raw) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| eyre::eyre!("usage: set KEY VALUE"))?;
                let field: Field = key.parse()?;
                self.store.set(field.parse_value(raw)?)?;
                writeln!(out, "{field} = {}", self.store.get(field))?;
            }
            "get" => {
                let field: Field = rest.parse()?;
                writeln!(out, "{}", self.store.get(field))?;
            }
            "font" => {
                let family: FontFamily = rest.parse()?;
                self.store.set_font_family(family)?;
                writeln!(out, "font-family = {family}")?;
            }
            "grid" => self.toggle(Field::ShowGridOverlay, rest, out)?,
            "dark" => self.toggle(Field::IsDarkMode, rest, out)?,
            "show" => {
                writeln!(out, "{}", serde_json::to_string_pretty(self.store.config())?)?;
            }
            "css" => {
                let css = String::from_utf8(generate(self.store.config())?)?;
                write!(out, "{css}")?;
            }
            "export" => {
                let location = export_stylesheet(self.store.config(), self.delivery.as_ref())?;
                writeln!(out, "exported {}", location.display())?;
            }
            "preview" => self.write_preview(out)?,
            "fields" => commands::fields(out)?,
            "fonts" => commands::fonts(out)?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => return Err(eyre::eyre!("unknown command '{other}' (try `help`)")),
        }

        Ok(Outcome::Continue)
    }

    fn toggle(&mut self, field: Field, raw: &str, out: &mut impl Write) -> eyre::Result<()> {
        let value = field.parse_value(raw)?;
        self.store.set(value)?;
        writeln!(out, "{field} = {}", self.store.get(field))?;
        Ok(())
    }

    fn write_preview(&self, out: &mut impl Write) -> eyre::Result<()> {
        let links = self.store.loader().loaded_stylesheets();
        let location = write_preview(self.store.config(), &links, self.delivery.as_ref())?;
        writeln!(out, "preview {}", location.display())?;
        Ok(())
    }
}

