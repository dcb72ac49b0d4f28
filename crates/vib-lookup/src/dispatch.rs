//! Inbound text classification.

/// Greeting command.
pub const START_COMMAND: &str = "/start";
/// Usage help command.
pub const INFO_COMMAND: &str = "/info";

/// What to do with an inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowWelcome,
    ShowHelp,
    /// Blank text; no reply is sent.
    Ignore,
    /// Search the dataset with the trimmed text.
    SearchVehicle(String),
}

/// Classify a message. Only the two exact command literals are special;
/// anything else non-blank, including unknown `/commands`, is a search.
pub fn dispatch(text: &str) -> Action {
    match text.trim() {
        "" => Action::Ignore,
        START_COMMAND => Action::ShowWelcome,
        INFO_COMMAND => Action::ShowHelp,
        query => Action::SearchVehicle(query.to_string()),
    }
}
