use cortland::video::{self, Glyph, GlyphStyle};
use cortland::Cortland;
use tui::backend::Backend;
use tui::layout::Rect;
use tui::style::{Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Frame;

/// Draw the machine's 40x24 text page, centered, inside a border.
pub fn draw<B: Backend>(frame: &mut Frame<B>, machine: &Cortland) {
    let size = frame.size();

    let width = (video::TEXT_COLUMNS as u16 + 2).min(size.width);
    let height = (video::TEXT_ROWS as u16 + 2).min(size.height);
    let x = (size.width - width) / 2;
    let y = (size.height - height) / 2;
    let area = Rect::new(x, y, width, height);

    let rows: Vec<Spans> = (0..video::TEXT_ROWS)
        .map(|row| text_row(machine, row))
        .collect();

    let block = Block::default().borders(Borders::ALL).title("cortland");
    frame.render_widget(Paragraph::new(rows).block(block), area);
}

fn text_row(machine: &Cortland, row: usize) -> Spans<'static> {
    let base = video::ROW_OFFSETS[row];

    let spans: Vec<Span> = (0..video::TEXT_COLUMNS)
        .map(|column| {
            let byte = machine.ram_byte(base + column as u16);
            let Glyph { character, style } = video::glyph(byte);
            Span::styled(character.to_string(), span_style(style))
        })
        .collect();

    Spans::from(spans)
}

fn span_style(style: GlyphStyle) -> Style {
    match style {
        GlyphStyle::Normal => Style::default(),
        GlyphStyle::Inverse => Style::default().add_modifier(Modifier::REVERSED),
        GlyphStyle::Blinking => Style::default().add_modifier(Modifier::SLOW_BLINK),
    }
}
