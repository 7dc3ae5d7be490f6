use super::Cell;
use crate::text::char_width;
use crate::types::Rgb;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Writes `text` starting at `(x, y)`, stopping before column `max_x`.
    ///
    /// Wide characters take two cells; the second is marked as a
    /// continuation. A wide character that would straddle `max_x` is dropped.
    /// Colors and style come from `brush`; its character is ignored.
    /// Returns the column after the last written cell.
    pub fn put_str(&mut self, x: u16, y: u16, max_x: u16, text: &str, brush: Cell) -> u16 {
        let max_x = max_x.min(self.width);
        let mut col = x;
        if y >= self.height {
            return col;
        }

        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > max_x {
                break;
            }
            let cell = Cell {
                char: ch,
                wide_continuation: false,
                ..brush
            };
            self.set(col, y, cell);
            if width == 2 {
                self.set(
                    col + 1,
                    y,
                    Cell {
                        wide_continuation: true,
                        ..cell
                    },
                );
            }
            col += width;
        }
        col
    }

    /// Paints the background of `width` cells from `(x, y)`, clearing their
    /// characters.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, bg: Rgb) {
        let end = x.saturating_add(width).min(self.width);
        for col in x..end {
            self.set(col, y, Cell::default().with_bg(bg));
        }
    }

    /// Characters of row `y` as a string, skipping continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
