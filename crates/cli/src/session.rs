//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockroom_core::ItemId;
use stockroom_inventory::{Tracker, TrackerCommand, TrackerOutcome};

use crate::config::CliConfig;
use crate::display::{describe, write_table};
use crate::menu::{MenuChoice, write_menu};
use crate::prompt::{Prompter, Reply};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session: a tracker driven by lines from `input`.
#[derive(Debug)]
pub struct Session<R, W> {
    tracker: Tracker,
    prompter: Prompter<R, W>,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(tracker: Tracker, input: R, output: W, config: CliConfig) -> Self {
        Self {
            tracker,
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> Tracker {
        self.tracker
    }

    /// Show the menu and handle choices until `Exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write_menu(self.prompter.output())?;
            let Some(line) = self.prompter.line()? else {
                break;
            };
            if self.handle(&line)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let Some(choice) = MenuChoice::parse(line) else {
            self.say("Invalid choice. Please try again.")?;
            return Ok(Flow::Continue);
        };

        if choice.needs_items() && self.tracker.store().is_empty() {
            self.say("Inventory is empty.")?;
            return Ok(Flow::Continue);
        }

        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::SortByName => self.sort(),
            MenuChoice::Search => self.search(),
            MenuChoice::LowStock => self.low_stock(),
            MenuChoice::UpdateQuantity => self.update_quantity(),
            MenuChoice::Undo => self.undo(),
            MenuChoice::Exit => {
                self.say("Exiting... Thank you!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let id = match self.prompter.ask_parsed::<ItemId>("Enter Item ID (unique): ")? {
            Reply::Value(id) => id,
            Reply::Invalid(_) => return self.invalid_number(),
            Reply::Closed => return Ok(Flow::Exit),
        };
        // Reject early so the user is not asked for fields that will be thrown away.
        if self.tracker.store().contains_id(id) {
            self.say("ID already exists!")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompter.ask("Enter Item Name: ")? else {
            return Ok(Flow::Exit);
        };
        if self.tracker.store().contains_name(&name) {
            self.say("Product name already exists!")?;
            return Ok(Flow::Continue);
        }

        let quantity = match self.prompter.ask_parsed::<i64>("Enter Quantity: ")? {
            Reply::Value(q) => q,
            Reply::Invalid(_) => return self.invalid_number(),
            Reply::Closed => return Ok(Flow::Exit),
        };
        let Some(location) = self.prompter.ask("Enter Location: ")? else {
            return Ok(Flow::Exit);
        };

        let command = TrackerCommand::Insert {
            id,
            name,
            quantity,
            location,
        };
        match self.tracker.execute(command) {
            Ok(_) => self.say("Product added successfully!")?,
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Enter Product Name to remove completely: ")? else {
            return Ok(Flow::Exit);
        };
        match self.tracker.execute(TrackerCommand::Remove { name }) {
            Ok(_) => self.say("Product removed successfully.")?,
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        write_table(self.prompter.output(), self.tracker.store().all())?;
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> io::Result<Flow> {
        match self.tracker.execute(TrackerCommand::SortByName) {
            Ok(_) => self.say("Products sorted successfully.")?,
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Enter Product Name to search: ")? else {
            return Ok(Flow::Exit);
        };
        match self.tracker.execute(TrackerCommand::Find { name }) {
            Ok(TrackerOutcome::Found(record)) => write_table(self.prompter.output(), [&record])?,
            Ok(other) => debug!(outcome = ?other, "search produced no record"),
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn low_stock(&mut self) -> io::Result<Flow> {
        let view = match self.config.low_stock_threshold {
            Some(threshold) => self.tracker.low_stock_at_most(threshold),
            None => self.tracker.low_stock_view(),
        };
        if view.is_empty() {
            if let Some(threshold) = self.config.low_stock_threshold {
                let out = self.prompter.output();
                writeln!(out, "No products at or below {threshold}.")?;
            }
            return Ok(Flow::Continue);
        }
        write_table(self.prompter.output(), view)?;
        Ok(Flow::Continue)
    }

    fn update_quantity(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Enter Product Name to update: ")? else {
            return Ok(Flow::Exit);
        };
        let current = match self.tracker.store().find_by_name(&name) {
            Ok(record) => record.quantity(),
            Err(err) => {
                self.say(describe(&err))?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.prompter.output(), "Current quantity: {current}")?;

        let quantity = match self.prompter.ask_parsed::<i64>("Enter new quantity: ")? {
            Reply::Value(q) => q,
            Reply::Invalid(_) => return self.invalid_number(),
            Reply::Closed => return Ok(Flow::Exit),
        };
        match self
            .tracker
            .execute(TrackerCommand::UpdateQuantity { name, quantity })
        {
            Ok(_) => self.say("Quantity updated successfully.")?,
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn undo(&mut self) -> io::Result<Flow> {
        match self.tracker.execute(TrackerCommand::UndoLast) {
            Ok(_) => self.say("Undo successful.")?,
            Err(err) => self.say(describe(&err))?,
        }
        Ok(Flow::Continue)
    }

    fn invalid_number(&mut self) -> io::Result<Flow> {
        self.say("Invalid number.")?;
        Ok(Flow::Continue)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.prompter.output(), "{message}")
    }
}
