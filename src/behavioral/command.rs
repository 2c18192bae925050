// Command Pattern - requests as objects, run through an invoker.
// Two commands share one light; the remote control is a rebindable invoker.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::composition::{Capability, Invoker};
use crate::error::Result;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
    switches: usize,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<RefCell<Light>> {
        Rc::new(RefCell::new(Light::new()))
    }

    pub fn turn_on(&mut self) -> &'static str {
        self.on = true;
        self.switches += 1;
        "The light is on."
    }

    pub fn turn_off(&mut self) -> &'static str {
        self.on = false;
        self.switches += 1;
        "The light is off."
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// How many times either command has reached this light.
    pub fn switches(&self) -> usize {
        self.switches
    }
}

// ============================================================================
// Commands
// ============================================================================

pub struct TurnOnCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Capability<(), String> for TurnOnCommand {
    fn perform(&self, _input: ()) -> Result<String> {
        Ok(self.light.borrow_mut().turn_on().to_string())
    }
}

pub struct TurnOffCommand {
    light: Rc<RefCell<Light>>,
}

impl TurnOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Capability<(), String> for TurnOffCommand {
    fn perform(&self, _input: ()) -> Result<String> {
        Ok(self.light.borrow_mut().turn_off().to_string())
    }
}

/// Runs its commands in order and stops at the first failure.
/// The output is one line per command that ran.
#[derive(Default)]
pub struct MacroCommand {
    commands: Vec<Box<dyn Capability<(), String>>>,
}

impl MacroCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, command: impl Capability<(), String> + 'static) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Capability<(), String> for MacroCommand {
    fn perform(&self, _input: ()) -> Result<String> {
        let mut lines = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            debug!(command = command.name(), "macro step");
            lines.push(command.perform(())?);
        }
        Ok(lines.join("\n"))
    }
}

// ============================================================================
// Invoker
// ============================================================================

pub struct RemoteControl {
    slot: Invoker<String>,
}

impl RemoteControl {
    /// A remote with an empty slot; pressing the button fails until a command is set.
    pub fn new() -> Self {
        Self {
            slot: Invoker::unbound(),
        }
    }

    pub fn with_command(command: impl Capability<(), String> + 'static) -> Self {
        Self {
            slot: Invoker::new(command),
        }
    }

    pub fn set_command(&mut self, command: impl Capability<(), String> + 'static) {
        self.slot.rebind(command);
    }

    pub fn press_button(&self) -> Result<String> {
        self.slot.run(())
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}
