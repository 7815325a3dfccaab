//! Stacked layers acting as the traversability oracle.

use waypath_core::{Point, Range};
use waypath_paths::Walkable;

use crate::layer::TileLayer;

/// An ordered stack of [`TileLayer`]s.
///
/// A cell is walkable iff no layer explicitly marks it non-walkable. Cells a
/// layer leaves empty, or does not cover at all, are walkable as far as that
/// layer is concerned, so an empty stack blocks nothing.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    layers: Vec<TileLayer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_layer(mut self, layer: TileLayer) -> Self {
        self.push(layer);
        self
    }

    /// Add a layer on top of the stack.
    pub fn push(&mut self, layer: TileLayer) {
        self.layers.push(layer);
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// First layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    pub fn layer_mut(&mut self, name: &str) -> Option<&mut TileLayer> {
        self.layers.iter_mut().find(|l| l.name() == name)
    }

    /// Remove and return the first layer called `name`.
    pub fn remove(&mut self, name: &str) -> Option<TileLayer> {
        let i = self.layers.iter().position(|l| l.name() == name)?;
        Some(self.layers.remove(i))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Smallest rectangle covering every layer.
    pub fn bounds(&self) -> Range {
        self.layers
            .iter()
            .fold(Range::default(), |acc, l| acc.union(l.bounds()))
    }

    /// Name of the lowest layer that blocks `p`, if any.
    pub fn blocking_layer(&self, p: Point) -> Option<&str> {
        self.layers.iter().find(|l| l.vetoes(p)).map(TileLayer::name)
    }
}

impl Walkable for LayerStack {
    fn is_walkable(&self, p: Point) -> bool {
        !self.layers.iter().any(|l| l.vetoes(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::scatter;
    use crate::tile::{Legend, Tile};
    use waypath_paths::{PathOutcome, find_path, manhattan, search};

    const GROUND: &str = "
......
......
......
......";

    const WALLS: &str = "
__#___
__#___
__#___
______";

    const PROPS: &str = "
______
______
____#_
____#_";

    fn town() -> LayerStack {
        let legend = Legend::default();
        LayerStack::new()
            .with_layer(TileLayer::parse("ground", GROUND, &legend).unwrap())
            .with_layer(TileLayer::parse("walls", WALLS, &legend).unwrap())
            .with_layer(TileLayer::parse("props", PROPS, &legend).unwrap())
    }

    fn assert_connected(from: Point, path: &[Point]) {
        let mut prev = from;
        for &p in path {
            assert_eq!(manhattan(prev, p), 1, "{prev} -> {p} is not a single step");
            prev = p;
        }
    }

    #[test]
    fn empty_stack_blocks_nothing() {
        let s = LayerStack::new();
        assert!(s.is_empty());
        assert!(s.is_walkable(Point::new(3, 3)));
        assert!(s.is_walkable(Point::new(-100, 7)));
        assert!(s.bounds().is_empty());
    }

    #[test]
    fn any_layer_can_veto() {
        let s = town();
        assert_eq!(s.len(), 3);
        assert!(s.is_walkable(Point::new(0, 0)));
        assert!(!s.is_walkable(Point::new(2, 1)));
        assert!(!s.is_walkable(Point::new(4, 3)));
        assert_eq!(s.blocking_layer(Point::new(2, 1)), Some("walls"));
        assert_eq!(s.blocking_layer(Point::new(4, 2)), Some("props"));
        assert_eq!(s.blocking_layer(Point::new(0, 0)), None);
    }

    #[test]
    fn explicit_open_does_not_override_a_veto() {
        let legend = Legend::default();
        let s = LayerStack::new()
            .with_layer(TileLayer::parse("a", "#.", &legend).unwrap())
            .with_layer(TileLayer::parse("b", "..", &legend).unwrap());
        assert!(!s.is_walkable(Point::new(0, 0)));
        assert!(s.is_walkable(Point::new(1, 0)));
    }

    #[test]
    fn unmarked_tiles_are_walkable() {
        let mut layer = TileLayer::new("decor", Range::sized(2, 2));
        layer.fill(Tile::unmarked(9));
        let s = LayerStack::new().with_layer(layer);
        assert!(Range::sized(2, 2).iter().all(|p| s.is_walkable(p)));
    }

    #[test]
    fn layer_lookup_and_removal() {
        let mut s = town();
        assert!(s.layer("walls").is_some());
        assert!(s.layer("roof").is_none());
        s.layer_mut("props").unwrap().clear_tile(Point::new(4, 2));
        assert!(s.is_walkable(Point::new(4, 2)));

        let walls = s.remove("walls").unwrap();
        assert_eq!(walls.name(), "walls");
        assert_eq!(s.len(), 2);
        assert!(s.is_walkable(Point::new(2, 1)));
        assert!(s.remove("walls").is_none());
    }

    #[test]
    fn bounds_cover_all_layers() {
        let s = LayerStack::new()
            .with_layer(TileLayer::new("a", Range::sized(3, 2)))
            .with_layer(TileLayer::new("b", Range::new(1, 1, 5, 4)));
        assert_eq!(s.bounds(), Range::new(0, 0, 5, 4));
    }

    #[test]
    fn routes_across_layers() {
        let s = town();
        let from = Point::new(0, 0);
        let to = Point::new(5, 0);
        let out = search(&s, s.bounds(), from, to);
        assert!(out.is_reached());
        let path = out.path();
        assert_eq!(path.len(), 11);
        assert!(path.iter().all(|&p| s.is_walkable(p)));
        assert_connected(from, path);
    }

    #[test]
    fn blocked_goal_on_upper_layer() {
        let s = town();
        let goal = Point::new(4, 3);
        let from = Point::new(5, 0);
        let out = search(&s, s.bounds(), from, goal);
        let PathOutcome::Partial(path) = out else {
            panic!("expected a partial path");
        };
        let last = *path.last().unwrap();
        assert_eq!(manhattan(last, goal), 1);
        assert!(s.is_walkable(last));
        assert_connected(from, &path);
    }

    #[test]
    fn fully_blocked_stack_gives_empty_path() {
        let bounds = Range::sized(6, 6);
        let s = LayerStack::new().with_layer(scatter("rocks", bounds, 1.0));
        assert!(find_path(&s, bounds, Point::new(0, 0), Point::new(5, 5)).is_empty());
    }

    #[test]
    fn random_maps_respect_path_invariants() {
        let bounds = Range::sized(24, 16);
        for round in 0..40 {
            let s = LayerStack::new()
                .with_layer(scatter("rocks", bounds, 0.25))
                .with_layer(scatter("trees", bounds, 0.1));
            let from = Point::new(round % 24, (round * 7) % 16);
            let to = Point::new((round * 5 + 11) % 24, (round * 3 + 9) % 16);

            let out = search(&s, bounds, from, to);
            let path = out.path();
            assert!(path.iter().all(|&p| bounds.contains(p)));
            assert!(path.iter().all(|&p| s.is_walkable(p) || p == to));
            assert!(!path.contains(&from));
            assert_connected(from, path);

            match &out {
                PathOutcome::Reached(path) => {
                    assert_eq!(path.last(), Some(&to));
                    assert!(s.is_walkable(to));
                }
                PathOutcome::Partial(path) => {
                    let last = *path.last().unwrap();
                    assert!(manhattan(last, to) < manhattan(from, to) || !s.is_walkable(from));
                }
                PathOutcome::NoPath => {}
            }

            assert_eq!(find_path(&s, bounds, from, to), path);
        }
    }

    #[test]
    fn out_of_bounds_inputs_stay_in_bounds() {
        let bounds = Range::sized(10, 10);
        let s = LayerStack::new().with_layer(scatter("rocks", bounds, 0.2));
        let path = find_path(&s, bounds, Point::new(5, 5), Point::new(30, -4));
        assert!(path.iter().all(|&p| bounds.contains(p)));
        assert!(find_path(&s, bounds, Point::new(-3, 2), Point::new(5, 5)).is_empty());
    }
}
