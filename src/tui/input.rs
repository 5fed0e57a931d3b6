use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move the cursor up in the focused pane
    Up,
    /// Move the cursor down in the focused pane
    Down,
    PageUp,
    PageDown,
    /// Open the highlighted entry in a tab
    Select,
    /// Activate the next tab
    NextTab,
    /// Activate the previous tab
    PreviousTab,
    /// Move focus to the tab list
    FocusTabs,
    /// Move focus to the content pane
    FocusContent,
    /// Show the open-path prompt
    OpenPrompt,
    /// Re-read the active tab
    Refresh,
    /// Switch between flat listing and tree
    ToggleTree,
    /// Show file information for the active tab
    FileInfo,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Keys understood while the open prompt is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Insert(char),
    Backspace,
    /// Cycle the file-type filter
    CycleFilter,
    Submit,
    Cancel,
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        // Cursor
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::Up,
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::Down,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Up,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Down,
        (KeyCode::PageUp, _) => KeyAction::PageUp,
        (KeyCode::PageDown, _) => KeyAction::PageDown,
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Select,

        // Tabs
        (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::NextTab,
        (KeyCode::BackTab, _) => KeyAction::PreviousTab,

        // Focus
        (KeyCode::Left, KeyModifiers::NONE) => KeyAction::FocusTabs,
        (KeyCode::Char('h'), KeyModifiers::NONE) => KeyAction::FocusTabs,
        (KeyCode::Right, KeyModifiers::NONE) => KeyAction::FocusContent,
        (KeyCode::Char('l'), KeyModifiers::NONE) => KeyAction::FocusContent,

        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::OpenPrompt,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => KeyAction::OpenPrompt,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,
        (KeyCode::F(5), _) => KeyAction::Refresh,
        (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTree,
        (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::FileInfo,

        // Help: ?
        (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::Help,
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events to prompt edits
/// Used when ViewState is OpenPrompt
pub fn handle_prompt_input(key: KeyEvent) -> PromptAction {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => PromptAction::Submit,
        (KeyCode::Esc, _) => PromptAction::Cancel,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => PromptAction::Cancel,
        (KeyCode::Tab, _) => PromptAction::CycleFilter,
        (KeyCode::Backspace, _) => PromptAction::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => PromptAction::Insert(c),
        _ => PromptAction::None,
    }
}
