use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the centered sub-rectangle of `area` with the given size (clipped
/// to `area` if it doesn't fit)
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Rect::new(0, 0, 80, 25),
        Size::new(22, 21),
        Rect::new(29, 2, 22, 21)
    )]
    #[case(Rect::new(0, 0, 80, 25), Size::new(80, 25), Rect::new(0, 0, 80, 25))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(10, 6), Rect::new(15, 7, 10, 6))]
    #[case(Rect::new(0, 0, 10, 10), Size::new(20, 20), Rect::new(0, 0, 10, 10))]
    #[case(Rect::ZERO, Size::new(4, 4), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }
}
