use crate::garden_core::tool::Tool;
use crate::garden_core::tree::TreeId;
use crate::garden_runtime::Command;

/// One line of console input, parsed into what the shell should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Input(Command),
    /// Pointer click on the ground at (x, z); may still miss it.
    ClickGround { x: f32, z: f32 },
    List,
    Clear,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ConsoleCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };

    // single-key tool bindings, same as the original's keyboard shortcuts
    let mut chars = word.chars();
    if let (Some(key), None) = (chars.next(), chars.next()) {
        if let Some(tool) = Tool::from_key(key) {
            return Ok(ConsoleCommand::Input(Command::SelectTool(tool)));
        }
    }

    let command = match word {
        "seed" => ConsoleCommand::Input(Command::SelectTool(Tool::Seed)),
        "remove" => ConsoleCommand::Input(Command::SelectTool(Tool::Remove)),
        "fertilize" => ConsoleCommand::Input(Command::SelectTool(Tool::Fertilize)),
        "none" => ConsoleCommand::Input(Command::ClearTool),
        "ground" => ConsoleCommand::ClickGround {
            x: parse_f32(parts.next(), "x coordinate")?,
            z: parse_f32(parts.next(), "z coordinate")?,
        },
        "tree" => ConsoleCommand::Input(Command::ActOnTree(parse_id(parts.next())?)),
        "hover" => ConsoleCommand::Input(Command::Hover(parse_id(parts.next())?)),
        "unhover" => ConsoleCommand::Input(Command::Unhover(parse_id(parts.next())?)),
        "hide" => ConsoleCommand::Input(Command::SetSuspended(true)),
        "show" => ConsoleCommand::Input(Command::SetSuspended(false)),
        "list" => ConsoleCommand::List,
        "clear" => ConsoleCommand::Clear,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(command)
}

fn parse_f32(part: Option<&str>, what: &str) -> Result<f32, String> {
    let text = part.ok_or_else(|| format!("missing {what}"))?;
    text.parse()
        .map_err(|_| format!("invalid {what} '{text}'"))
}

fn parse_id(part: Option<&str>) -> Result<TreeId, String> {
    let text = part.ok_or_else(|| "missing tree id".to_string())?;
    let raw: u64 = text
        .parse()
        .map_err(|_| format!("invalid tree id '{text}'"))?;
    Ok(TreeId(raw))
}
