use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Grid-addressed painting surface over the frame buffer. Plots aimed outside
/// the live area are dropped per-cell; a bad coordinate never aborts a tick.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    pub fn plot(&mut self, row: u16, col: u16, glyph: char, style: Style) {
        if row >= self.area.height || col >= self.area.width {
            return;
        }
        let x = self.area.x + col;
        let y = self.area.y + row;
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Style};

    use super::*;

    #[test]
    fn plot_writes_inside_the_area() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(&mut buf, area);

        canvas.plot(2, 3, '#', Style::new().fg(Color::Yellow));

        assert_eq!(buf[(3, 2)].symbol(), "#");
        assert_eq!(buf[(3, 2)].fg, Color::Yellow);
    }

    #[test]
    fn plot_outside_the_area_is_a_silent_no_op() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(&mut buf, area);

        canvas.plot(4, 0, '#', Style::new());
        canvas.plot(0, 6, '#', Style::new());
        canvas.plot(u16::MAX, u16::MAX, '#', Style::new());

        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn plot_respects_the_area_offset() {
        let screen = Rect::new(0, 0, 10, 6);
        let area = Rect::new(2, 1, 6, 4);
        let mut buf = Buffer::empty(screen);
        let mut canvas = Canvas::new(&mut buf, area);

        canvas.plot(0, 0, '|', Style::new());

        assert_eq!(buf[(2, 1)].symbol(), "|");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
