//! Command: requests wrapped as objects, replayed by an invoker that keeps
//! a cursor over its history.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};

/// Anything that knows how to carry out a request.
pub trait Receiver {
    fn action(&self) -> String;
}

pub trait Command {
    fn execute(&self, trace: &mut Trace);
}

/// A receiver identified by a number, e.g. `Receiver 2 Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedReceiver(pub u32);

impl Receiver for NumberedReceiver {
    fn action(&self) -> String {
        format!("Receiver {} Action", self.0)
    }
}

/// Binds a receiver to the action performed on execute.
pub struct ConcreteCommand<R: Receiver> {
    receiver: R,
}

impl<R: Receiver> ConcreteCommand<R> {
    pub fn new(receiver: R) -> Self {
        Self { receiver }
    }
}

impl<R: Receiver> Command for ConcreteCommand<R> {
    fn execute(&self, trace: &mut Trace) {
        trace.line(self.receiver.action());
    }
}

/// Stores commands and replays them.
///
/// The cursor starts on the first command. At either end of the history
/// `redo`/`undo` leave the cursor where it is and run the current command
/// again instead of refusing to move.
#[derive(Default)]
pub struct Invoker {
    commands: Vec<Box<dyn Command>>,
    pos: usize,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Runs every stored command in insertion order. The cursor is untouched.
    pub fn execute_all(&self, trace: &mut Trace) {
        for command in &self.commands {
            command.execute(trace);
        }
    }

    /// Steps forward and executes. Returns the index that ran.
    pub fn redo(&mut self, trace: &mut Trace) -> Result<usize> {
        if self.commands.is_empty() {
            return Err(PatternError::EmptyHistory);
        }
        if self.pos + 1 < self.commands.len() {
            self.pos += 1;
        } else {
            tracing::debug!(pos = self.pos, "redo at end of history, re-running current command");
        }
        self.commands[self.pos].execute(trace);
        Ok(self.pos)
    }

    /// Steps back and executes. Returns the index that ran.
    pub fn undo(&mut self, trace: &mut Trace) -> Result<usize> {
        if self.commands.is_empty() {
            return Err(PatternError::EmptyHistory);
        }
        if self.pos > 0 {
            self.pos -= 1;
        } else {
            tracing::debug!("undo at start of history, re-running current command");
        }
        self.commands[self.pos].execute(trace);
        Ok(self.pos)
    }
}

pub struct CommandDemo;

impl Demo for CommandDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Command
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let mut invoker = Invoker::new();
        for id in 1..=3 {
            invoker.store(Box::new(ConcreteCommand::new(NumberedReceiver(id))));
        }

        for _ in 0..3 {
            invoker.redo(trace)?;
        }
        for _ in 0..3 {
            invoker.undo(trace)?;
        }

        trace.line("ALL COMMANDS: ");
        invoker.execute_all(trace);
        Ok(())
    }
}
