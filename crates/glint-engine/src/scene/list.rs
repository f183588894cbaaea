use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame (or one panel).
///
/// `push` is O(1); the paint-order index buffer is rebuilt lazily and reused
/// across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted_indices.clear();
            self.sorted_indices.extend(0..self.items.len());
            let items = &self.items;
            self.sorted_indices.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Rect};
    use crate::scene::PanelCmd;

    fn panel(w: f32) -> DrawCmd {
        DrawCmd::Panel(PanelCmd {
            rect: Rect::new(0.0, 0.0, w, w),
            fill: ColorRgba::white(),
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: ColorRgba::transparent(),
        })
    }

    fn widths(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Panel(p) => p.rect.size.x,
                _ => -1.0,
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex(1), panel(1.0));
        list.push(ZIndex(0), panel(2.0));
        list.push(ZIndex(1), panel(3.0));
        list.push(ZIndex(0), panel(4.0));
        assert_eq!(widths(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push(ZIndex(5), panel(1.0));
        let _ = widths(&mut list);
        list.push(ZIndex(-1), panel(2.0));
        assert_eq!(widths(&mut list), vec![2.0, 1.0]);
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push(ZIndex(0), panel(1.0));
        list.clear();
        assert!(list.is_empty());
        list.push(ZIndex(0), panel(2.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
