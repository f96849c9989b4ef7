//! Layout and hit-testing helpers shared by components.

use ratatui::layout::{Position, Rect};

/// Index of the area in `item_areas` containing (`x`, `y`), provided the
/// point also lies within `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, item_areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let point = Position::new(x, y);
    if !container.contains(point) {
        return None;
    }
    item_areas.iter().position(|area| area.contains(point))
}

/// Document row under terminal row `y` for a page drawn in `area` at `offset`.
pub fn document_row(area: &Rect, offset: u16, x: u16, y: u16) -> Option<u32> {
    if !area.contains(Position::new(x, y)) {
        return None;
    }
    Some(u32::from(offset) + u32::from(y - area.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_requires_both_container_and_item() {
        let container = Rect::new(0, 0, 40, 3);
        let items = [Rect::new(10, 1, 6, 1), Rect::new(18, 1, 7, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 12, 1), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 20, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 17, 1), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 12, 5), None);
    }

    #[test]
    fn document_row_adds_scroll_offset() {
        let area = Rect::new(0, 3, 80, 20);
        assert_eq!(document_row(&area, 10, 5, 3), Some(10));
        assert_eq!(document_row(&area, 10, 5, 7), Some(14));
        assert_eq!(document_row(&area, 10, 5, 2), None);
    }
}
