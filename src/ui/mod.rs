//! Fixed terminal output: startup banner, help menu and screen clearing.

pub mod theme;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use theme::{paint, Theme};

const BANNER: &[&str] = &[
    r"          /##                                         ##\                  ##\",
    r"         | ##                                         ## |                 ## |",
    r"     /####### /#######\  ######\  /#######\  #######\ #######\   ######\ ######\",
    r"    /##__  ##/## | |## \##  __##\ ## | |## \##  _____|##  __##\  \____##\_##  _|",
    r"   | ##   |##|## | |## |## |  ## |## |_|##_/## /      ## |  ## | ####### | ## |",
    r"   | ##   |##|## |_|## |## |  ## |##|______ ## |      ## |  ## |##  __## | ## |##\",
    r"   |  #######\######## /######## |######## |\#######\ ## |  ## |\####### | \####  |",
    r"    \_______/ \_______/ \____ ## |\_______/  \_______|\__|  \__| \_______|  \____/",
    r"                        __    ## |",
    r"                       |##|   ## |",
    r"                       |######## |",
    r"                        \_______/",
];

/// `(command, argument hint, description)` grouped under section headings.
const HELP_SECTIONS: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "General",
        &[
            ("/help", "", "Show this help menu"),
            ("/name", "<name>", "Change your nickname"),
            ("/status", "", "Show connection info"),
            ("/clear", "", "Clear the screen"),
            ("/exit", "", "Quit Dogechat"),
        ],
    ),
    (
        "Navigation",
        &[
            ("1-9", "", "Quick switch to conversation"),
            ("/list", "", "Show all conversations"),
            ("/switch", "", "Interactive conversation switcher"),
            ("/public", "", "Go to public chat"),
        ],
    ),
    (
        "Messaging",
        &[
            ("/dm", "<name>", "Start private conversation"),
            ("/dm", "<name> <msg>", "Send quick private message"),
            ("/reply", "", "Reply to last private message"),
        ],
    ),
    (
        "Channels",
        &[
            ("/j", "#channel", "Join or create a channel"),
            ("/j", "#channel <password>", "Join with password"),
            ("/leave", "", "Leave current channel"),
            ("/pass", "<pwd>", "Set channel password (owner only)"),
            ("/transfer", "@user", "Transfer ownership (owner only)"),
        ],
    ),
    (
        "Discovery",
        &[
            ("/channels", "", "List all discovered channels"),
            ("/online", "", "Show who's online"),
            ("/w", "", "Alias for /online"),
        ],
    ),
    (
        "Privacy & Security",
        &[
            ("/block", "@user", "Block a user"),
            ("/block", "", "List blocked users"),
            ("/unblock", "@user", "Unblock a user"),
        ],
    ),
];

/// Column the description starts at, counted from the command name.
const HELP_COLUMN: usize = 14;

/// Banner in bright yellow on a black 24-bit background.
pub fn header_banner() -> String {
    let mut out = String::new();
    out.push_str(Theme::banner_background());
    out.push_str(Theme::accent());
    for line in BANNER {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(Theme::reset());
    out
}

/// Sets the terminal background to black for the rest of the session.
pub fn dark_background() -> &'static str {
    Theme::dark_background()
}

/// The command reference printed by `/help`.
pub fn help_text() -> String {
    let mut lines = vec![
        String::new(),
        paint(Theme::accent(), "━━━ Dogechat Commands ━━━"),
        String::new(),
    ];
    lines.push(paint(Theme::muted(), "  (type normally to send in current mode)"));
    for (heading, entries) in HELP_SECTIONS {
        lines.push(String::new());
        lines.push(paint(Theme::heading(), &format!("▶ {}", heading)));
        for (command, hint, description) in entries.iter() {
            let hint_width = if hint.is_empty() {
                0
            } else {
                hint.chars().count() + 1
            };
            let used = command.chars().count() + hint_width;
            let gap = " ".repeat(HELP_COLUMN.saturating_sub(used).max(1));
            let hint = if hint.is_empty() {
                String::new()
            } else {
                format!(" {}", paint(Theme::muted(), hint))
            };
            let command = paint(Theme::accent(), command);
            lines.push(format!("  {}{}{}{}", command, hint, gap, description));
        }
    }
    lines.push(String::new());
    lines.push(paint(Theme::heading(), "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"));
    lines.join("\n")
}

/// Clear the screen and move the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

/// Red error line for rejected commands.
pub fn error_line(text: &str) -> String {
    paint(Theme::error(), &format!("✗ {}", text))
}

/// Grey informational line.
pub fn info_line(text: &str) -> String {
    paint(Theme::muted(), text)
}
