use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use crate::store::User;

const INDEX_HEADER: &str = "(index)";
const NAME_HEADER: &str = "name";
const AGE_HEADER: &str = "age";

fn column_width<'a>(header: &'a str, values: impl Iterator<Item = &'a str>) -> u16 {
    let widest = values
        .map(|v| Line::from(v).width())
        .chain(std::iter::once(Line::from(header).width()))
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

/// Render users as a bordered table into an off-screen buffer and return its
/// lines, one per terminal row, with trailing blanks removed.
pub fn render_users_table(users: &[User]) -> Vec<String> {
    let indices: Vec<String> = (0..users.len()).map(|i| i.to_string()).collect();
    let ages: Vec<String> = users.iter().map(|u| u.age.to_string()).collect();

    let index_w = column_width(INDEX_HEADER, indices.iter().map(String::as_str));
    let name_w = column_width(NAME_HEADER, users.iter().map(|u| u.name.as_str()));
    let age_w = column_width(AGE_HEADER, ages.iter().map(String::as_str));

    let rows = users.iter().enumerate().map(|(i, u)| {
        Row::new(vec![
            Cell::from(indices[i].as_str()),
            Cell::from(u.name.as_str()),
            Cell::from(ages[i].as_str()),
        ])
    });

    let widths = [
        Constraint::Length(index_w),
        Constraint::Length(name_w),
        Constraint::Length(age_w),
    ];

    let header = Row::new(vec![INDEX_HEADER, NAME_HEADER, AGE_HEADER])
        .style(Style::default().add_modifier(Modifier::BOLD));

    // columns + two gaps + left/right border
    let width = index_w
        .saturating_add(name_w)
        .saturating_add(age_w)
        .saturating_add(4);
    // rows + header + top/bottom border
    let height = u16::try_from(users.len().saturating_add(3)).unwrap_or(u16::MAX);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .column_spacing(1)
        .render(area, &mut buf);

    (0..area.height).map(|y| buffer_row(&buf, y)).collect()
}

/// Join one buffer row into text. A wide symbol covers the cells after it,
/// which ratatui leaves as blanks, so those are skipped.
fn buffer_row(buf: &Buffer, y: u16) -> String {
    let mut line = String::new();
    let mut covered = 0usize;
    for x in buf.area.left()..buf.area.right() {
        if covered > 0 {
            covered -= 1;
            continue;
        }
        let symbol = buf[(x, y)].symbol();
        line.push_str(symbol);
        covered = Line::from(symbol).width().saturating_sub(1);
    }
    line.trim_end().to_string()
}
