/// Screen the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Options,
    HighScoreView,
    Playing,
    Paused,
    GameOver,
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Options,
    HighScore,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Play,
        MenuItem::Options,
        MenuItem::HighScore,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "Play Game",
            MenuItem::Options => "Options",
            MenuItem::HighScore => "High Score",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Entries of the options screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionItem {
    Speed,
    Back,
}

impl OptionItem {
    pub const ALL: [OptionItem; 2] = [OptionItem::Speed, OptionItem::Back];
}

/// Move a cursor by `delta` over `len` items, wrapping at both ends
pub fn wrap_cursor(cursor: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (cursor as i64 + i64::from(delta)).rem_euclid(len) as usize
}
