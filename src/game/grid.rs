use ratatui::layout::{Position, Size};

/// The playing field: a fixed rectangle of cells with hard edges.  Cells are
/// 0-indexed [`Position`]s; anything at or past the dimensions is out of
/// bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub(crate) fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}
