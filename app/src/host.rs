//! Headless host.
//!
//! Reads one command per line, recomposes the app for each one and acts on
//! the fresh tree through the devtools inspector:
//!
//! ```text
//! tap <text>              tap a button, item, card or link by its text or tag
//! type <label> <text>     replace the text of a field; quote labels with spaces
//! submit <label>          fire the field's search/done action
//! check <plant>           toggle the checkbox in the plant's row
//! go <route>              navigate directly
//! back                    system back
//! dump                    print the current frame
//! stack                   print the back stack
//! quit
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use bloom_devtools::{InspectError, Inspector, TextBackend};
use bloom_navigation::{UnknownRouteError, back};

use crate::app::BloomApp;
use crate::config::HostConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(String),
    Type { label: String, text: String },
    Submit(String),
    Check(String),
    Go(String),
    Back,
    Dump,
    Stack,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error(transparent)]
    Inspect(#[from] InspectError),
    #[error(transparent)]
    Route(#[from] UnknownRouteError),
}

/// Splits off the first argument, honouring double quotes.
fn first_arg(s: &str) -> Result<Option<(String, &str)>, CommandError> {
    let s = s.trim_start();
    if s.is_empty() {
        return Ok(None);
    }
    if let Some(quoted) = s.strip_prefix('"') {
        let end = quoted.find('"').ok_or(CommandError::UnterminatedQuote)?;
        return Ok(Some((quoted[..end].to_string(), quoted[end + 1..].trim())));
    }
    Ok(Some(match s.split_once(char::is_whitespace) {
        Some((arg, rest)) => (arg.to_string(), rest.trim()),
        None => (s.to_string(), ""),
    }))
}

/// Argument that may be quoted, or else the whole rest of the line.
fn whole_arg(rest: &str, cmd: &'static str) -> Result<String, CommandError> {
    let rest = rest.trim();
    if rest.starts_with('"')
        && let Some((arg, _)) = first_arg(rest)?
    {
        return Ok(arg);
    }
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(cmd));
    }
    Ok(rest.to_string())
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Ok(match cmd {
            "tap" => Command::Tap(whole_arg(rest, "tap")?),
            "type" => {
                let (label, text) = first_arg(rest)?.ok_or(CommandError::MissingArgument("type"))?;
                let text = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(text);
                Command::Type {
                    label,
                    text: text.to_string(),
                }
            }
            "submit" => Command::Submit(whole_arg(rest, "submit")?),
            "check" => Command::Check(whole_arg(rest, "check")?),
            "go" => Command::Go(whole_arg(rest, "go")?),
            "back" => Command::Back,
            "dump" => Command::Dump,
            "stack" => Command::Stack,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}

pub struct Host<W: Write> {
    app: BloomApp,
    backend: TextBackend<W>,
    config: HostConfig,
}

impl<W: Write> Host<W> {
    /// Restores the saved back stack if there is one, then applies the
    /// configured start route.
    pub fn new(app: BloomApp, out: W, config: HostConfig) -> Self {
        let nav = app.navigator();
        let mut restored = false;
        if let Some(path) = &config.saved_stack {
            match std::fs::read_to_string(path) {
                Ok(json) => match nav.restore_json(&json) {
                    Ok(()) => {
                        log::info!("restored back stack from {}", path.display());
                        restored = true;
                    }
                    Err(e) => log::warn!("ignoring saved back stack {}: {e}", path.display()),
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("cannot read {}: {e}", path.display()),
            }
        }
        if !restored
            && config.start_route != nav.current_route()
            && let Err(e) = nav.navigate(&config.start_route)
        {
            log::error!("start route: {e}");
        }
        Self {
            app,
            backend: TextBackend::new(out),
            config,
        }
    }

    pub fn app(&self) -> &BloomApp {
        &self.app
    }

    pub fn backend(&self) -> &TextBackend<W> {
        &self.backend
    }

    pub fn into_output(self) -> W {
        self.backend.into_inner()
    }

    /// Runs one command. Returns false once the host should stop.
    pub fn execute(&mut self, cmd: &Command) -> anyhow::Result<bool> {
        let nav = self.app.navigator();
        let root = self.app.compose();
        let ins = Inspector::new(&root);
        let outcome: Result<(), CommandError> = match cmd {
            Command::Tap(target) => match ins.click(target) {
                Err(InspectError::NotFound(_)) => ins.click_link(target).map_err(Into::into),
                other => other.map_err(Into::into),
            },
            Command::Type { label, text } => ins.type_text(label, text).map_err(Into::into),
            Command::Submit(label) => ins.submit(label).map_err(Into::into),
            Command::Check(plant) => ins.toggle(plant).map(|_| ()).map_err(Into::into),
            Command::Go(route) => nav.navigate(route).map_err(Into::into),
            Command::Back => {
                if !back::handle() {
                    self.say("already at the start")?;
                }
                Ok(())
            }
            Command::Dump => {
                self.app.present(&root, &mut self.backend)?;
                Ok(())
            }
            Command::Stack => {
                let line = nav.back_stack().join(" > ");
                self.say(&line)?;
                Ok(())
            }
            Command::Quit => return Ok(false),
        };
        match outcome {
            Ok(()) => log::debug!("{cmd:?} -> {}", nav.current_route()),
            Err(e) => self.say(&format!("error: {e}"))?,
        }
        Ok(true)
    }

    /// Reads commands until `quit` or end of input, then saves the back
    /// stack if configured.
    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let keep_going = match line.parse::<Command>() {
                Ok(cmd) => self.execute(&cmd)?,
                Err(e) => {
                    self.say(&format!("error: {e}"))?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.save_stack()
    }

    fn save_stack(&self) -> anyhow::Result<()> {
        let Some(path) = &self.config.saved_stack else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        std::fs::write(path, self.app.navigator().to_json())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved back stack to {}", path.display());
        Ok(())
    }

    fn say(&mut self, msg: &str) -> std::io::Result<()> {
        writeln!(self.backend.writer(), "{msg}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_labels() {
        assert_eq!(
            "type \"Email address\" ana@example.com".parse::<Command>(),
            Ok(Command::Type {
                label: "Email address".into(),
                text: "ana@example.com".into(),
            })
        );
        assert_eq!(
            "type Search snake plant".parse::<Command>(),
            Ok(Command::Type {
                label: "Search".into(),
                text: "snake plant".into(),
            })
        );
    }

    #[test]
    fn tap_takes_the_rest_of_the_line() {
        assert_eq!(
            "tap Create account".parse::<Command>(),
            Ok(Command::Tap("Create account".into()))
        );
        assert_eq!(
            "submit \"Search\"".parse::<Command>(),
            Ok(Command::Submit("Search".into()))
        );
    }

    #[test]
    fn rejects_bad_lines() {
        assert_eq!(
            "fly away".parse::<Command>(),
            Err(CommandError::Unknown("fly".into()))
        );
        assert_eq!(
            "go".parse::<Command>(),
            Err(CommandError::MissingArgument("go"))
        );
        assert_eq!(
            "type \"Email".parse::<Command>(),
            Err(CommandError::UnterminatedQuote)
        );
    }
}
