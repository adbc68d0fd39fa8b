//! Terminal command parsing
//!
//! Lines starting with `/` are commands; anything else is a chat message.

/// A parsed terminal line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a tab by name
    Tab(String),
    Next,
    Previous,
    /// Set a language by code, or toggle when none is given
    Language(Option<String>),
    Location(String),
    Predict(String),
    /// Fill the crop form from `key=value` pairs and submit it
    Crop(Vec<(String, String)>),
    Crops,
    Clear,
    /// Print the header clock
    Time,
    Help,
    Quit,
    Chat(String),
    Unknown(String),
}

/// Parse one input line
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Chat(line.to_string());
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "tab" | "t" if !args.is_empty() => Command::Tab(args.to_lowercase()),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Previous,
        "lang" | "l" => Command::Language((!args.is_empty()).then(|| args.to_lowercase())),
        "location" | "loc" if !args.is_empty() => Command::Location(args.to_string()),
        "predict" if !args.is_empty() => Command::Predict(args.to_lowercase()),
        "crop" => Command::Crop(parse_fields(args)),
        "crops" => Command::Crops,
        "clear" => Command::Clear,
        "time" => Command::Time,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Split `key=value;key=value`, skipping pairs without `=`
fn parse_fields(args: &str) -> Vec<(String, String)> {
    args.split(';')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

pub const HELP_TEXT: &str = "\
Commands:
  /tab <name>          show home, crop, weather, predictions or chat
  /next, /prev         move between tabs
  /lang [en|hi]        set or toggle the language
  /location <name>     New Delhi, Mumbai, Ahmedabad or Modasa
  /predict <crop>      wheat, rice or corn
  /crop k=v;k=v        add a crop (cropType, plantingDate, fieldSize, soilType,
                       irrigationType, fertilizer, notes)
  /crops               list saved crops
  /clear               remove all saved crops
  /time                show the current date and time
  /quit                exit
Anything else is sent to the assistant.";
