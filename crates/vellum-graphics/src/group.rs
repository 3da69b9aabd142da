use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use vellum_engine::coords::{Rect, Vec2};
use vellum_engine::paint::Color;
use vellum_engine::surface::{RenderHints, Surface};

use crate::error::{Result, SceneError};
use crate::object::{same_object, GraphicsObject};
use crate::observer::{GraphicsObserver, ObserverSet};

/// Copy-on-write member list. Readers clone the `Arc`; writers use
/// `Arc::make_mut`, which copies only while a snapshot is still alive.
pub type Members = Arc<Vec<Arc<dyn GraphicsObject>>>;

/// Membership and aggregate bounds, updated together under one lock.
struct Contents {
    members: Members,
    /// Union of member bounds in local space. `None` when nothing is drawable.
    bounds: Option<Rect>,
}

/// A group of drawables that is added, moved, and removed as one unit.
///
/// The group defines its own coordinate system: member positions are relative
/// to the group's position. Members are painted in insertion order (last added
/// is on top) and picked in reverse order.
///
/// A group observes each member, so any change to a member recomputes the
/// group's bounds and is re-announced to the group's own observers. Groups
/// nest: a group is itself a [`GraphicsObject`].
///
/// Groups are always handled through `Arc` because they register a weak
/// pointer to themselves with every member.
///
/// # Example
/// ```rust,ignore
/// let root = GraphicsGroup::new();
/// let badge = GraphicsGroup::at(10.0, 10.0);
/// badge.add(Arc::new(Ellipse::circle(8.0, 8.0, 8.0)));
/// root.add(badge.clone());
///
/// root.draw(&mut surface);
/// let hit = root.element_at(14.0, 14.0); // Some(badge)
/// ```
pub struct GraphicsGroup {
    this: Weak<GraphicsGroup>,
    position: RwLock<Vec2>,
    /// Serialises membership edits. Held while (de)registering with members so
    /// that `contents` is never locked across a call into a member.
    edit: Mutex<()>,
    contents: RwLock<Contents>,
    /// Offscreen copy of the last frame, drawn with [`RenderHints::high_quality`].
    backing: Mutex<Option<Box<dyn Surface>>>,
    observers: ObserverSet,
}

impl GraphicsGroup {
    /// Creates an empty group positioned at `(0, 0)`.
    pub fn new() -> Arc<Self> {
        Self::at(0.0, 0.0)
    }

    /// Creates an empty group whose local origin sits at `(x, y)` in its
    /// container's space.
    pub fn at(x: f32, y: f32) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            position: RwLock::new(Vec2::new(x, y)),
            edit: Mutex::new(()),
            contents: RwLock::new(Contents { members: Arc::new(Vec::new()), bounds: None }),
            backing: Mutex::new(None),
            observers: ObserverSet::new(),
        })
    }

    /// Weak handle under which this group registers with its members.
    pub fn as_observer(&self) -> Weak<dyn GraphicsObserver> {
        self.this.clone()
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Appends `object` on top of the existing members.
    ///
    /// A drawable should belong to at most one group; this is not checked.
    /// Adding a group to itself is ignored.
    pub fn add(&self, object: Arc<dyn GraphicsObject>) {
        if same_object(object.as_ref(), self) {
            log::warn!("ignoring attempt to add a graphics group to itself");
            return;
        }

        let len = {
            let _edit = self.edit.lock();
            object.add_observer(self.as_observer());

            let mut contents = self.contents.write();
            contents.bounds = union_bounds(contents.bounds, object.bounds());
            let members = Arc::make_mut(&mut contents.members);
            members.push(object);
            members.len()
        };

        log::debug!("group: added member ({len} total)");
        self.changed();
    }

    /// Moves `object` to `(x, y)` in this group's local space, then adds it.
    pub fn add_at(&self, object: Arc<dyn GraphicsObject>, x: f32, y: f32) {
        object.set_position(x, y);
        self.add(object);
    }

    /// Removes `object` from the group and stops observing it.
    ///
    /// Returns [`SceneError::NotFound`] if `object` is not a member, in which
    /// case nothing changes.
    pub fn remove(&self, object: &dyn GraphicsObject) -> Result<()> {
        let len = {
            let _edit = self.edit.lock();
            let (len, still_member) = {
                let mut contents = self.contents.write();
                let index = contents
                    .members
                    .iter()
                    .position(|m| same_object(m.as_ref(), object))
                    .ok_or(SceneError::NotFound)?;

                let members = Arc::make_mut(&mut contents.members);
                members.remove(index);
                let still_member = members.iter().any(|m| same_object(m.as_ref(), object));
                contents.bounds = aggregate_bounds(&contents.members);
                (contents.members.len(), still_member)
            };
            // A duplicate entry keeps the registration alive.
            if !still_member {
                object.remove_observer(&self.as_observer());
            }
            len
        };

        log::debug!("group: removed member ({len} left)");
        self.changed();
        Ok(())
    }

    /// Removes every member, deregistering from each one first.
    pub fn remove_all(&self) {
        let removed = {
            let _edit = self.edit.lock();
            let detached = {
                let mut contents = self.contents.write();
                contents.bounds = None;
                std::mem::replace(&mut contents.members, Arc::new(Vec::new()))
            };
            let observer = self.as_observer();
            for member in detached.iter() {
                member.remove_observer(&observer);
            }
            detached.len()
        };

        log::debug!("group: removed all {removed} member(s)");
        self.changed();
    }

    /// Snapshot of the members in draw order (bottom first).
    ///
    /// Later mutations do not affect a snapshot already taken.
    pub fn members(&self) -> Members {
        self.contents.read().members.clone()
    }

    pub fn len(&self) -> usize {
        self.contents.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.read().members.is_empty()
    }

    pub fn contains(&self, object: &dyn GraphicsObject) -> bool {
        self.contents
            .read()
            .members
            .iter()
            .any(|m| same_object(m.as_ref(), object))
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Topmost member hit by `(x, y)`, given in the container's space.
    pub fn element_at(&self, x: f32, y: f32) -> Option<Arc<dyn GraphicsObject>> {
        let local = Vec2::new(x, y) - self.position();
        self.members()
            .iter()
            .rev()
            .find(|m| m.test_hit(local.x, local.y))
            .cloned()
    }

    /// Width of the aggregate member bounds. Independent of position.
    pub fn width(&self) -> f32 {
        self.local_bounds().map_or(0.0, Rect::width)
    }

    /// Height of the aggregate member bounds. Independent of position.
    pub fn height(&self) -> f32 {
        self.local_bounds().map_or(0.0, Rect::height)
    }

    /// Aggregate member bounds in the group's own space.
    pub fn local_bounds(&self) -> Option<Rect> {
        self.contents.read().bounds
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Runs `f` with the backing surface from the most recent draw, if any.
    pub fn with_backing_surface<R>(&self, f: impl FnOnce(Option<&dyn Surface>) -> R) -> R {
        let backing = self.backing.lock();
        f(backing.as_deref())
    }

    /// Redraws every member in local space onto a fresh sub-surface of
    /// `target`, sized to cover the aggregate bounds from the local origin.
    fn render_backing(&self, target: &dyn Surface, members: &Members, bounds: Rect) {
        let mut backing = self.backing.lock();

        let max = bounds.max();
        let width = max.x.ceil().max(1.0) as u32;
        let height = max.y.ceil().max(1.0) as u32;

        let mut sub = target.create_sub_surface(width, height);
        sub.set_render_hints(RenderHints::high_quality());
        sub.clear(Color::transparent());
        for member in members.iter() {
            member.draw(&mut *sub);
        }

        *backing = Some(sub);
    }

    #[inline]
    fn changed(&self) {
        self.observers.notify(self);
    }
}

impl GraphicsObject for GraphicsGroup {
    /// Draws members in order, translated by the group's position.
    ///
    /// Nothing is drawn while the aggregate bounds are empty. The surface
    /// origin is restored before returning, including during unwinding.
    fn draw(&self, surface: &mut dyn Surface) {
        let (members, bounds) = {
            let contents = self.contents.read();
            (contents.members.clone(), contents.bounds)
        };
        let Some(bounds) = bounds.filter(|b| !b.is_empty()) else {
            return;
        };

        self.render_backing(surface, &members, bounds);

        let target = Translated::new(surface, self.position());
        for member in members.iter() {
            member.draw(&mut *target.surface);
        }
    }

    /// Aggregate bounds offset by the group's position, rounded up to whole pixels.
    fn bounds(&self) -> Option<Rect> {
        let origin = self.position();
        self.local_bounds().map(|b| b.translate(origin).ceil())
    }

    fn test_hit(&self, x: f32, y: f32) -> bool {
        self.element_at(x, y).is_some()
    }

    fn position(&self) -> Vec2 {
        *self.position.read()
    }

    /// Moves the group's coordinate system. Local bounds are unchanged.
    fn set_position(&self, x: f32, y: f32) {
        *self.position.write() = Vec2::new(x, y);
        log::trace!("group: moved to ({x}, {y})");
        self.changed();
    }

    fn observers(&self) -> &ObserverSet {
        &self.observers
    }
}

impl GraphicsObserver for GraphicsGroup {
    /// Any member change invalidates the cached union: recompute from all
    /// members and pass the notification upward.
    fn graphic_changed(&self, _changed: &dyn GraphicsObject) {
        {
            let mut contents = self.contents.write();
            contents.bounds = aggregate_bounds(&contents.members);
        }
        log::trace!("group: member changed, bounds recomputed");
        self.changed();
    }
}

impl fmt::Display for GraphicsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position();
        write!(
            f,
            "A graphics group at position ({}, {}) with width={} and height={}",
            p.x,
            p.y,
            self.width(),
            self.height()
        )
    }
}

/// Two groups are equal when they sit at the same position and hold the same
/// members, by identity, in the same order.
impl PartialEq for GraphicsGroup {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        if self.position() != other.position() {
            return false;
        }
        let (ours, theirs) = (self.members(), other.members());
        ours.len() == theirs.len()
            && ours
                .iter()
                .zip(theirs.iter())
                .all(|(a, b)| same_object(a.as_ref(), b.as_ref()))
    }
}

impl fmt::Debug for GraphicsGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contents = self.contents.read();
        f.debug_struct("GraphicsGroup")
            .field("position", &self.position())
            .field("members", &contents.members.len())
            .field("bounds", &contents.bounds)
            .finish()
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

/// Translates a surface for the lifetime of the guard.
struct Translated<'a> {
    surface: &'a mut dyn Surface,
    offset: Vec2,
}

impl<'a> Translated<'a> {
    fn new(surface: &'a mut dyn Surface, offset: Vec2) -> Self {
        surface.translate(offset.x, offset.y);
        Self { surface, offset }
    }
}

impl Drop for Translated<'_> {
    fn drop(&mut self) {
        self.surface.translate(-self.offset.x, -self.offset.y);
    }
}

/// Unions `next` into `acc`. Absent or non-finite bounds contribute nothing.
fn union_bounds(acc: Option<Rect>, next: Option<Rect>) -> Option<Rect> {
    match next.filter(|r| r.is_finite()) {
        Some(next) => Some(acc.map_or(next, |acc| acc.union(next))),
        None => {
            if next.is_some() {
                log::trace!("group: skipping non-finite member bounds");
            }
            acc
        }
    }
}

fn aggregate_bounds(members: &[Arc<dyn GraphicsObject>]) -> Option<Rect> {
    members
        .iter()
        .fold(None, |acc, member| union_bounds(acc, member.bounds()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use vellum_engine::record::{DrawCmd, DrawList};
    use vellum_engine::surface::Antialiasing;

    use super::*;
    use crate::shapes::{Ellipse, Rectangle};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Counter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl GraphicsObserver for Counter {
        fn graphic_changed(&self, _changed: &dyn GraphicsObject) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn watch(object: &dyn GraphicsObject) -> Arc<Counter> {
        let counter = Arc::new(Counter::default());
        let weak: Weak<Counter> = Arc::downgrade(&counter);
        object.add_observer(weak);
        counter
    }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Arc<Rectangle> {
        Arc::new(Rectangle::new(x, y, w, h))
    }

    // ── membership ────────────────────────────────────────────────────────

    #[test]
    fn empty_group_has_no_bounds() {
        let g = GraphicsGroup::new();
        assert_eq!(g.bounds(), None);
        assert_eq!(g.width(), 0.0);
        assert_eq!(g.height(), 0.0);
        assert!(g.is_empty());
    }

    #[test]
    fn add_unions_bounds_and_registers_observer() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        let b = rect(10.0, 2.0, 5.0, 5.0);
        g.add(a.clone());
        g.add(b.clone());

        assert_eq!(g.local_bounds(), Some(Rect::new(0.0, 0.0, 15.0, 7.0)));
        assert!(a.observers().contains(&g.as_observer()));
        assert!(b.observers().contains(&g.as_observer()));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn add_at_positions_before_adding() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        g.add_at(a.clone(), 3.0, 4.0);
        assert_eq!(a.position(), Vec2::new(3.0, 4.0));
        assert_eq!(g.local_bounds(), Some(Rect::new(3.0, 4.0, 5.0, 5.0)));
    }

    #[test]
    fn add_fires_changed_once() {
        let g = GraphicsGroup::new();
        let counter = watch(g.as_ref());
        g.add(rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn adding_group_to_itself_is_ignored() {
        let g = GraphicsGroup::new();
        g.add(g.clone());
        assert!(g.is_empty());
        assert!(g.observers().is_empty());
    }

    #[test]
    fn remove_recomputes_bounds_and_deregisters() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        let b = rect(10.0, 0.0, 5.0, 5.0);
        g.add(a.clone());
        g.add(b.clone());

        g.remove(a.as_ref()).unwrap();
        assert_eq!(g.local_bounds(), Some(Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.observers().contains(&g.as_observer()));
        assert!(!g.contains(a.as_ref()));
    }

    #[test]
    fn remove_non_member_is_not_found_and_changes_nothing() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        let stranger = rect(50.0, 50.0, 1.0, 1.0);
        g.add(a.clone());
        let counter = watch(g.as_ref());

        assert_eq!(g.remove(stranger.as_ref()), Err(SceneError::NotFound));
        assert_eq!(g.len(), 1);
        assert_eq!(g.local_bounds(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn double_remove_is_not_found() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        g.add(a.clone());
        assert!(g.remove(a.as_ref()).is_ok());
        assert_eq!(g.remove(a.as_ref()), Err(SceneError::NotFound));
    }

    #[test]
    fn removing_one_duplicate_keeps_registration() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        g.add(a.clone());
        g.add(a.clone());

        g.remove(a.as_ref()).unwrap();
        assert!(g.contains(a.as_ref()));
        assert!(a.observers().contains(&g.as_observer()));
    }

    #[test]
    fn remove_all_detaches_every_member() {
        let g = GraphicsGroup::new();
        let members: Vec<Arc<Rectangle>> = (0..4).map(|i| rect(i as f32 * 3.0, 0.0, 2.0, 2.0)).collect();
        for m in &members {
            g.add(m.clone());
        }
        let counter = watch(g.as_ref());

        g.remove_all();
        assert!(g.is_empty());
        assert_eq!(g.bounds(), None);
        assert_eq!(counter.count(), 1);
        for m in &members {
            assert!(m.observers().is_empty());
        }
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let g = GraphicsGroup::new();
        g.add(rect(0.0, 0.0, 1.0, 1.0));
        let snapshot = g.members();
        g.add(rect(2.0, 0.0, 1.0, 1.0));
        g.remove_all();
        assert_eq!(snapshot.len(), 1);
        assert!(g.is_empty());
    }

    /// A drawable that announces a change whenever an observer (un)registers.
    #[derive(Debug)]
    struct Announcing {
        inner: Rectangle,
    }

    impl GraphicsObject for Announcing {
        fn draw(&self, surface: &mut dyn Surface) {
            self.inner.draw(surface);
        }
        fn bounds(&self) -> Option<Rect> {
            self.inner.bounds()
        }
        fn test_hit(&self, x: f32, y: f32) -> bool {
            self.inner.test_hit(x, y)
        }
        fn position(&self) -> Vec2 {
            self.inner.position()
        }
        fn set_position(&self, x: f32, y: f32) {
            self.inner.set_position(x, y);
        }
        fn observers(&self) -> &ObserverSet {
            self.inner.observers()
        }
        fn add_observer(&self, observer: Weak<dyn GraphicsObserver>) {
            self.observers().add(observer);
            self.observers().notify(self);
        }
        fn remove_observer(&self, observer: &Weak<dyn GraphicsObserver>) -> bool {
            self.observers().notify(self);
            self.observers().remove(observer)
        }
    }

    #[test]
    fn member_notifying_during_registration_does_not_deadlock() {
        let g = GraphicsGroup::new();
        let a = Arc::new(Announcing { inner: Rectangle::new(0.0, 0.0, 5.0, 5.0) });
        let b = Arc::new(Announcing { inner: Rectangle::new(10.0, 0.0, 5.0, 5.0) });

        g.add(a.clone());
        g.add(b.clone());
        assert_eq!(g.local_bounds(), Some(Rect::new(0.0, 0.0, 15.0, 5.0)));

        g.remove(a.as_ref()).unwrap();
        assert_eq!(g.local_bounds(), Some(Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.observers().is_empty());

        g.remove_all();
        assert_eq!(g.bounds(), None);
        assert!(b.observers().is_empty());
    }

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn groups_with_same_position_and_members_are_equal() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(2.0, 0.0, 1.0, 1.0);
        let left = GraphicsGroup::at(4.0, 4.0);
        let right = GraphicsGroup::at(4.0, 4.0);
        for g in [&left, &right] {
            g.add(a.clone());
            g.add(b.clone());
        }
        assert_eq!(*left, *right);

        right.set_position(5.0, 4.0);
        assert_ne!(*left, *right);
    }

    #[test]
    fn equality_compares_members_by_identity_and_order() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(2.0, 0.0, 1.0, 1.0);
        let twin = rect(0.0, 0.0, 1.0, 1.0);

        let left = GraphicsGroup::new();
        left.add(a.clone());
        left.add(b.clone());

        let swapped = GraphicsGroup::new();
        swapped.add(b.clone());
        swapped.add(a.clone());
        assert_ne!(*left, *swapped);

        let lookalike = GraphicsGroup::new();
        lookalike.add(twin);
        lookalike.add(b);
        assert_ne!(*left, *lookalike);

        assert_eq!(*left, *left);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn bounds_are_offset_by_position_and_ceiled() {
        let g = GraphicsGroup::at(0.5, 1.25);
        g.add(rect(0.0, 0.0, 4.5, 2.0));
        assert_eq!(g.bounds(), Some(Rect::new(1.0, 2.0, 5.0, 2.0)));
        assert_eq!(g.width(), 4.5);
    }

    #[test]
    fn malformed_member_contributes_nothing() {
        let g = GraphicsGroup::new();
        g.add(rect(f32::NAN, 0.0, 5.0, 5.0));
        assert_eq!(g.bounds(), None);
        g.add(rect(1.0, 1.0, 2.0, 2.0));
        assert_eq!(g.local_bounds(), Some(Rect::new(1.0, 1.0, 2.0, 2.0)));
    }

    #[test]
    fn element_at_prefers_topmost_member() {
        let g = GraphicsGroup::at(100.0, 100.0);
        let bottom = rect(0.0, 0.0, 10.0, 10.0);
        let top = rect(5.0, 5.0, 10.0, 10.0);
        g.add(bottom.clone());
        g.add(top.clone());

        let hit = g.element_at(107.0, 107.0).unwrap();
        assert!(same_object(hit.as_ref(), top.as_ref()));

        let hit = g.element_at(102.0, 102.0).unwrap();
        assert!(same_object(hit.as_ref(), bottom.as_ref()));

        assert!(g.element_at(7.0, 7.0).is_none());
        assert!(!g.test_hit(150.0, 150.0));
        assert!(g.test_hit(101.0, 101.0));
    }

    #[test]
    fn element_at_uses_shape_hit_test_not_bounds() {
        let g = GraphicsGroup::new();
        g.add(Arc::new(Ellipse::new(0.0, 0.0, 10.0, 10.0)));
        assert!(g.element_at(0.5, 0.5).is_none());
        assert!(g.element_at(5.0, 5.0).is_some());
    }

    #[test]
    fn set_position_moves_bounds_not_size() {
        let g = GraphicsGroup::at(0.0, 0.0);
        g.add(rect(2.0, 3.0, 4.0, 5.0));
        let counter = watch(g.as_ref());

        g.set_position(7.0, -2.0);
        assert_eq!(g.bounds(), Some(Rect::new(9.0, 1.0, 4.0, 5.0)));
        assert_eq!((g.width(), g.height()), (4.0, 5.0));
        assert_eq!(counter.count(), 1);
    }

    // ── notification ──────────────────────────────────────────────────────

    #[test]
    fn member_change_recomputes_and_propagates() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        g.add(a.clone());
        let counter = watch(g.as_ref());

        a.set_size(20.0, 1.0);
        assert_eq!(g.local_bounds(), Some(Rect::new(0.0, 0.0, 20.0, 1.0)));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn shrinking_member_shrinks_aggregate() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 50.0, 50.0);
        g.add(a.clone());
        g.add(rect(0.0, 0.0, 5.0, 5.0));

        a.set_size(1.0, 1.0);
        assert_eq!(g.local_bounds(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn removed_member_no_longer_notifies() {
        let g = GraphicsGroup::new();
        let a = rect(0.0, 0.0, 5.0, 5.0);
        g.add(a.clone());
        g.remove(a.as_ref()).unwrap();
        let counter = watch(g.as_ref());

        a.set_position(40.0, 40.0);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn nested_change_reaches_root() {
        let root = GraphicsGroup::new();
        let inner = GraphicsGroup::at(10.0, 10.0);
        let leaf = rect(0.0, 0.0, 5.0, 5.0);
        inner.add(leaf.clone());
        root.add(inner.clone());
        let counter = watch(root.as_ref());

        leaf.set_size(10.0, 10.0);
        assert_eq!(counter.count(), 1);
        assert_eq!(root.local_bounds(), Some(Rect::new(10.0, 10.0, 10.0, 10.0)));

        inner.set_position(0.0, 0.0);
        assert_eq!(counter.count(), 2);
        assert_eq!(root.local_bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    // ── rendering ─────────────────────────────────────────────────────────

    fn rect_commands(list: &DrawList) -> Vec<Rect> {
        list.commands()
            .filter_map(|c| match c {
                DrawCmd::Rect(r) => Some(r.rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_group_draws_nothing() {
        let g = GraphicsGroup::at(5.0, 5.0);
        let mut list = DrawList::new(64, 64);
        g.draw(&mut list);
        assert!(list.is_empty());
        g.with_backing_surface(|s| assert!(s.is_none()));
    }

    #[test]
    fn draw_translates_members_in_order_and_restores_origin() {
        let g = GraphicsGroup::at(10.0, 20.0);
        g.add(rect(0.0, 0.0, 2.0, 2.0));
        g.add(rect(5.0, 5.0, 2.0, 2.0));

        let mut list = DrawList::new(64, 64);
        list.translate(1.0, 1.0);
        g.draw(&mut list);

        assert_eq!(
            rect_commands(&list),
            vec![Rect::new(11.0, 21.0, 2.0, 2.0), Rect::new(16.0, 26.0, 2.0, 2.0)]
        );
        assert_eq!(list.origin(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn nested_groups_compose_translation() {
        let root = GraphicsGroup::at(100.0, 0.0);
        let inner = GraphicsGroup::at(10.0, 10.0);
        inner.add(rect(1.0, 1.0, 1.0, 1.0));
        root.add(inner);

        let mut list = DrawList::new(256, 256);
        root.draw(&mut list);
        assert_eq!(rect_commands(&list), vec![Rect::new(111.0, 11.0, 1.0, 1.0)]);
        assert_eq!(list.origin(), Vec2::zero());
    }

    #[test]
    fn backing_surface_uses_high_quality_hints_and_local_space() {
        let g = GraphicsGroup::at(30.0, 30.0);
        g.add(rect(2.0, 3.0, 4.5, 4.0));

        let mut list = DrawList::new(64, 64);
        g.draw(&mut list);

        // The target keeps its own hints.
        assert_eq!(list.render_hints().antialiasing, Antialiasing::Off);

        g.with_backing_surface(|backing| {
            let backing = backing.unwrap();
            assert_eq!(backing.size(), (7, 7));
            assert_eq!(backing.render_hints(), RenderHints::high_quality());

            let recorded = backing.as_any().downcast_ref::<DrawList>().unwrap();
            assert!(matches!(recorded.items()[0].cmd, DrawCmd::Clear(c) if c == Color::transparent()));
            assert_eq!(rect_commands(recorded), vec![Rect::new(2.0, 3.0, 4.5, 4.0)]);
        });
    }

    #[test]
    fn display_reports_position_and_size() {
        let g = GraphicsGroup::at(1.0, 2.0);
        g.add(rect(0.0, 0.0, 3.0, 4.0));
        assert_eq!(
            g.to_string(),
            "A graphics group at position (1, 2) with width=3 and height=4"
        );
    }
}
