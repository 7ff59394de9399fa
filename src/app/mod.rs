mod console;

pub use console::{parse_line, ConsoleCommand};

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::garden_runtime::{Command, GardenRuntime};

/// Interactive shell around the runtime: one accepted stdin line becomes at
/// most one command.
pub struct App {
    runtime: GardenRuntime,
}

impl App {
    pub fn new(runtime: GardenRuntime) -> Self {
        Self { runtime }
    }

    pub fn run(&mut self) -> Result<()> {
        print_help();
        let stdin = io::stdin();
        let mut out = io::stdout();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(ConsoleCommand::Quit) => break,
                Ok(command) => self.dispatch(command),
                Err(message) => println!("{message}"),
            }
        }

        self.runtime.shutdown();
        Ok(())
    }

    fn dispatch(&mut self, command: ConsoleCommand) {
        match command {
            ConsoleCommand::Input(input) => {
                self.runtime.apply(input);
                if matches!(
                    input,
                    Command::SelectTool(_) | Command::ClearTool
                ) {
                    self.print_tool();
                }
            }
            ConsoleCommand::ClickGround { x, z } => match self.runtime.pick_ground(x, z) {
                Some(point) => self.runtime.apply(Command::PlaceSeed(point)),
                // a pointer that misses the ground does nothing
                None => log::debug!("click at ({x:.1}, {z:.1}) missed the ground"),
            },
            ConsoleCommand::List => self.print_garden(),
            ConsoleCommand::Clear => self.runtime.clear(),
            ConsoleCommand::Help => print_help(),
            ConsoleCommand::Quit => {}
        }
    }

    fn print_tool(&self) {
        let name = match self.runtime.active_tool() {
            Some(tool) => tool.as_str(),
            None => "none",
        };
        println!("tool: {name}");
    }

    fn print_garden(&self) {
        let garden = self.runtime.garden();
        if garden.is_empty() {
            println!("the garden is empty");
            return;
        }
        println!("{} tree(s):", garden.len());
        for tree in garden.iter() {
            let position = tree.position();
            let focused = if self.runtime.focused() == Some(tree.id()) {
                "  (focused)"
            } else {
                ""
            };
            println!(
                "  #{} at ({:.1}, {:.1}, {:.1}) size {:.1}{focused}",
                tree.id().0,
                position.x,
                position.y,
                position.z,
                tree.size()
            );
        }
    }
}

fn print_help() {
    println!("tools:    seed (s) | remove (d) | fertilize (f) | none");
    println!("pointer:  ground <x> <z> | tree <id> | hover <id> | unhover <id>");
    println!("page:     hide | show");
    println!("other:    list | clear | help | quit");
}
