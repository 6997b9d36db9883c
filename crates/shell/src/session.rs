use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, warn};

use storefront_cart::{CartEngine, CartEvent};
use storefront_core::DomainError;
use storefront_events::{EventEnvelope, Subscription};

use crate::command::{Command, HELP};
use crate::render;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive storefront session over one engine.
pub struct Shell {
    engine: CartEngine,
    diagnostics: Subscription<EventEnvelope<CartEvent>>,
}

impl Shell {
    pub fn new(engine: CartEngine) -> Self {
        let diagnostics = engine.subscribe();
        Self { engine, diagnostics }
    }

    pub fn engine(&self) -> &CartEngine {
        &self.engine
    }

    /// Read commands until `quit` or end of input, re-rendering after each.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", self.render()).context("failed to write to output")?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let (message, flow) = self.handle_line(&line);

            if let Some(message) = message {
                writeln!(output, "{message}").context("failed to write to output")?;
            }
            if flow == Flow::Quit {
                break;
            }
        }

        output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Apply one line of input; returns the text to show and whether to go on.
    pub fn handle_line(&mut self, line: &str) -> (Option<String>, Flow) {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return (None, Flow::Continue),
            Err(err) => return (Some(err.to_string()), Flow::Continue),
        };

        let result = match &command {
            Command::Add(name) => self.engine.add_unit(name).map(|_| ()),
            Command::Remove(name) => self.engine.remove_last_unit(name).map(|_| ()),
            Command::Clear(name) => self.engine.remove_all_units(name).map(|_| ()),
            Command::Show => Ok(()),
            Command::Help => return (Some(HELP.to_string()), Flow::Continue),
            Command::Quit => return (None, Flow::Quit),
        };
        self.log_diagnostics();

        let page = self.render();
        let message = match result {
            Ok(()) => page,
            Err(err) => format!("{}\n\n{page}", user_message(&err)),
        };
        (Some(message), Flow::Continue)
    }

    pub fn render(&self) -> String {
        render::storefront(self.engine.products(), self.engine.cart())
    }

    fn log_diagnostics(&self) {
        for envelope in self.diagnostics.drain() {
            match serde_json::to_string(envelope.payload()) {
                Ok(payload) => debug!(
                    event_type = envelope.event_type(),
                    event_version = envelope.event_version(),
                    sequence = envelope.sequence_number(),
                    %payload,
                    "cart diagnostic"
                ),
                Err(err) => warn!(error = %err, "failed to serialize cart diagnostic"),
            }
        }
    }
}

fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::OutOfStock(name) => format!("Sorry, no more {name} in stock."),
        DomainError::ProductNotFound(name) => format!("We don't carry {name}."),
        other => format!("Something went wrong: {other}"),
    }
}
