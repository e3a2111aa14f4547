//! Drawing the select with plain crossterm commands.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use picklist::{Select, SelectAllState, SelectionMode};

use crate::host::TerminalHost;

/// Rows above the list: title, input line, spacer.
const HEADER_ROWS: u16 = 3;
/// Rows below the list: spacer, status, help.
const FOOTER_ROWS: u16 = 3;

/// Draw one frame and record the rendered rows with the host.
pub fn draw<T>(
    out: &mut impl Write,
    select: &Select<T>,
    host: &TerminalHost,
    size: (u16, u16),
    status: &str,
) -> io::Result<()>
where
    T: Clone + Display + Send + Sync + 'static,
{
    let (_, rows) = size;
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("picklist demo"),
        SetAttribute(Attribute::Reset)
    )?;

    let text = select.input_text().unwrap_or_default();
    let clear = if select.shows_clear_button() { " ✕" } else { "" };
    queue!(
        out,
        MoveTo(0, 1),
        Print(format!("[ {:<30} ] {}{}", text, select.icon(), clear))
    )?;

    let mut row = HEADER_ROWS;
    let list_height = rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS + 1).max(1) as usize;
    let items = select.items();

    if select.is_open() {
        if let Some(state) = select.select_all_checkbox() {
            let mark = match state {
                SelectAllState::All => "[x]",
                SelectAllState::None => "[ ]",
                SelectAllState::Partial => "[-]",
            };
            queue!(
                out,
                MoveTo(2, row),
                Print(format!("{} {}", mark, select.select_all_text()))
            )?;
            row += 1;
        }

        host.set_rows(items.iter().map(|item| item.id()).collect(), list_height);
        let highlighted = select.highlighted();
        let multi = select.mode() == SelectionMode::Multi;

        for item in items.iter().skip(host.offset()).take(list_height) {
            let selected = select.is_selected(item.value());
            let mark = match (multi, selected) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(*)",
                (false, false) => "( )",
            };
            let cursor = if highlighted == Some(item.id()) { ">" } else { " " };
            let label = item
                .label_text()
                .map(str::to_string)
                .unwrap_or_else(|| item.value().to_string());

            queue!(out, MoveTo(0, row))?;
            if item.is_disabled() {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            queue!(out, Print(format!("{} {} {}", cursor, mark, label)))?;
            queue!(out, SetAttribute(Attribute::Reset))?;
            row += 1;
        }
    }

    let footer = rows.saturating_sub(FOOTER_ROWS - 1);
    queue!(out, MoveTo(0, footer), Print(status))?;
    queue!(
        out,
        MoveTo(0, footer + 1),
        SetAttribute(Attribute::Dim),
        Print("space/enter: open  arrows: move  ctrl+a: all  esc: close/quit  ctrl+c: quit"),
        SetAttribute(Attribute::Reset)
    )?;

    out.flush()
}
