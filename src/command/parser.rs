//! Split raw player input into a verb and a target phrase

/// Recognized player verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Go,
    Look,
    Take,
    Inventory,
    Equip,
    Use,
    Talk,
    Attack,
    Help,
    Quit,
    Unknown,
}

impl Verb {
    /// Map a verb word (already lowercased) to a verb, honoring the
    /// classic aliases
    fn from_word(word: &str) -> Self {
        match word {
            "go" | "move" | "travel" => Verb::Go,
            "look" | "examine" => Verb::Look,
            "take" | "get" | "pickup" => Verb::Take,
            "inventory" | "i" | "items" => Verb::Inventory,
            "equip" | "wear" | "wield" => Verb::Equip,
            "use" | "drink" | "consume" => Verb::Use,
            "talk" | "speak" => Verb::Talk,
            "attack" | "fight" => Verb::Attack,
            "help" | "commands" => Verb::Help,
            "quit" | "exit" => Verb::Quit,
            _ => Verb::Unknown,
        }
    }
}

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    /// Everything after the verb word, lowercased; empty if absent
    pub target: String,
}

/// Parse raw input into a command
///
/// Input is lowercased and whitespace-trimmed; returns None for input that
/// is empty after trimming.
pub fn parse(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    let first = words.next()?;

    Some(Command {
        verb: Verb::from_word(first),
        target: words.collect::<Vec<_>>().join(" "),
    })
}
