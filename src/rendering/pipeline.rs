use crate::{
    rendering::camera::Camera,
    traits::{Drawable, RenderHost, RenderableId},
    LayerError, Result,
};
use fxhash::FxHashMap;
use std::rc::Rc;

struct RenderEntry<S: ?Sized> {
    z: i32,
    drawable: Rc<dyn Drawable<S>>,
}

/// In-memory render list honouring the [`RenderHost`] contract
///
/// Entries are kept in a map by id plus a render order sorted by
/// `(z, id)`. Ids only grow, so equal z values draw in registration order.
pub struct RenderList<S: ?Sized> {
    /// All entries indexed by ID
    entries: FxHashMap<RenderableId, RenderEntry<S>>,
    /// Ordered list of entry IDs for rendering (sorted by z)
    render_order: Vec<RenderableId>,
    next_id: u64,
}

impl<S: ?Sized> RenderList<S> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            render_order: Vec::new(),
            next_id: 0,
        }
    }

    /// Draw one frame: every visible entry, lowest z first.
    ///
    /// Returns how many entries were drawn.
    pub fn render_frame(&self, screen: &mut S, camera: &Camera) -> usize {
        let mut drawn = 0;
        for id in &self.render_order {
            if let Some(entry) = self.entries.get(id) {
                if entry.drawable.is_visible() {
                    entry.drawable.draw(screen, camera);
                    drawn += 1;
                }
            }
        }
        log::trace!("rendered {} of {} entries", drawn, self.entries.len());
        drawn
    }

    /// Current z of an entry
    pub fn z_of(&self, id: RenderableId) -> Option<i32> {
        self.entries.get(&id).map(|entry| entry.z)
    }

    pub fn contains(&self, id: RenderableId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Entry IDs in the order they will be drawn
    pub fn render_order(&self) -> &[RenderableId] {
        &self.render_order
    }

    /// Gets the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Updates the render order based on current z values
    fn update_render_order(&mut self) {
        let entries = &self.entries;
        self.render_order.sort_by_key(|id| {
            let z = entries.get(id).map(|entry| entry.z).unwrap_or(0);
            (z, *id)
        });
    }
}

impl<S: ?Sized> RenderHost<S> for RenderList<S> {
    fn register(&mut self, z: i32, drawable: Rc<dyn Drawable<S>>) -> RenderableId {
        let id = RenderableId(self.next_id);
        self.next_id += 1;

        self.entries.insert(id, RenderEntry { z, drawable });

        // New ids are the largest, so they go after every entry with z <= new z
        let insert_pos = self
            .render_order
            .iter()
            .position(|other| self.entries.get(other).map(|e| e.z > z).unwrap_or(false))
            .unwrap_or(self.render_order.len());
        self.render_order.insert(insert_pos, id);

        log::debug!("registered renderable {} at z {}", id, z);
        id
    }

    fn set_z(&mut self, id: RenderableId, z: i32) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(LayerError::UnknownRenderable(id))?;
        if entry.z != z {
            log::debug!("renderable {} moved from z {} to z {}", id, entry.z, z);
            entry.z = z;
            self.update_render_order();
        }
        Ok(())
    }

    fn release(&mut self, id: RenderableId) -> Result<()> {
        if self.entries.remove(&id).is_none() {
            return Err(LayerError::UnknownRenderable(id));
        }
        self.render_order.retain(|other| *other != id);
        log::debug!("released renderable {}", id);
        Ok(())
    }
}

impl<S: ?Sized> Default for RenderList<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Screen that just logs which drawables ran, in order
    type Trace = Vec<&'static str>;

    struct Probe {
        name: &'static str,
        visible: Cell<bool>,
    }

    impl Probe {
        fn new(name: &'static str) -> Rc<Self> {
            Rc::new(Self {
                name,
                visible: Cell::new(true),
            })
        }
    }

    impl Drawable<Trace> for Probe {
        fn is_visible(&self) -> bool {
            self.visible.get()
        }

        fn draw(&self, screen: &mut Trace, _camera: &Camera) {
            screen.push(self.name);
        }
    }

    fn frame(list: &RenderList<Trace>) -> Trace {
        let mut trace = Trace::new();
        list.render_frame(&mut trace, &Camera::default());
        trace
    }

    #[test]
    fn test_draws_in_ascending_z() {
        let mut list: RenderList<Trace> = RenderList::new();
        list.register(5, Probe::new("top"));
        list.register(-1, Probe::new("map"));
        list.register(0, Probe::new("middle"));
        list.register(-1, Probe::new("map-overlay"));

        assert_eq!(frame(&list), vec!["map", "map-overlay", "middle", "top"]);
    }

    #[test]
    fn test_invisible_entries_skipped() {
        let mut list: RenderList<Trace> = RenderList::new();
        let hidden = Probe::new("hidden");
        list.register(0, hidden.clone());
        list.register(1, Probe::new("shown"));

        hidden.visible.set(false);
        assert_eq!(frame(&list), vec!["shown"]);

        hidden.visible.set(true);
        assert_eq!(frame(&list), vec!["hidden", "shown"]);
    }

    #[test]
    fn test_set_z_reorders() {
        let mut list: RenderList<Trace> = RenderList::new();
        let a = list.register(0, Probe::new("a"));
        list.register(1, Probe::new("b"));

        list.set_z(a, 2).unwrap();
        assert_eq!(list.z_of(a), Some(2));
        assert_eq!(frame(&list), vec!["b", "a"]);

        // Moving into an occupied z keeps id order
        list.set_z(a, 1).unwrap();
        assert_eq!(frame(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_release() {
        let mut list: RenderList<Trace> = RenderList::new();
        let a = list.register(0, Probe::new("a"));
        list.register(0, Probe::new("b"));

        list.release(a).unwrap();
        assert!(!list.contains(a));
        assert_eq!(list.len(), 1);
        assert_eq!(frame(&list), vec!["b"]);

        assert!(matches!(
            list.release(a),
            Err(LayerError::UnknownRenderable(id)) if id == a
        ));
        assert!(list.set_z(a, 3).is_err());
    }
}
