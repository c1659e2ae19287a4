use std::fmt;

use serde::{Deserialize, Serialize};

use super::GradientLayer;

/// Stable handle to a layer in a [`LayerStack`].
///
/// Unaffected by reordering or removal of other layers; never reused within
/// the stack that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LayerId(u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Ordered blend layers keyed by [`LayerId`].
///
/// Index 0 is the topmost layer (listed first in CSS). Serialized as a plain
/// list of layers; ids are reassigned on load since they never reach output.
///
/// Equality compares layer values in order and ignores ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<GradientLayer>", into = "Vec<GradientLayer>")]
pub struct LayerStack {
    entries: Vec<(LayerId, GradientLayer)>,
    next_id: u64,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `layer` at the bottom of the stack.
    pub fn push(&mut self, layer: GradientLayer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, layer));
        id
    }

    pub fn remove(&mut self, id: LayerId) -> Option<GradientLayer> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, id: LayerId) -> Option<&GradientLayer> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, l)| l)
    }

    /// Applies `f` to the layer with `id`. Returns false when absent.
    pub fn update(&mut self, id: LayerId, f: impl FnOnce(&mut GradientLayer)) -> bool {
        match self.entries.iter_mut().find(|(i, _)| *i == id) {
            Some((_, layer)) => {
                f(layer);
                true
            }
            None => false,
        }
    }

    /// Index of `id`, 0 being topmost.
    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.entries.iter().position(|(i, _)| *i == id)
    }

    /// Moves the layer one step towards the top. False if absent or already on top.
    pub fn move_up(&mut self, id: LayerId) -> bool {
        match self.position(id) {
            Some(idx) if idx > 0 => {
                self.entries.swap(idx, idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the layer one step towards the bottom. False if absent or already last.
    pub fn move_down(&mut self, id: LayerId) -> bool {
        match self.position(id) {
            Some(idx) if idx + 1 < self.entries.len() => {
                self.entries.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Layers with their ids, topmost first.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &GradientLayer)> {
        self.entries.iter().map(|(id, l)| (*id, l))
    }

    /// Layers only, topmost first.
    pub fn layers(&self) -> impl Iterator<Item = &GradientLayer> {
        self.entries.iter().map(|(_, l)| l)
    }

    pub fn ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub(crate) fn map_layers(&self, f: impl Fn(&GradientLayer) -> GradientLayer) -> Self {
        Self {
            entries: self.entries.iter().map(|(id, l)| (*id, f(l))).collect(),
            next_id: self.next_id,
        }
    }
}

impl PartialEq for LayerStack {
    fn eq(&self, other: &Self) -> bool {
        self.layers().eq(other.layers())
    }
}

impl Eq for LayerStack {}

impl From<Vec<GradientLayer>> for LayerStack {
    fn from(layers: Vec<GradientLayer>) -> Self {
        let mut stack = LayerStack::new();
        for layer in layers {
            stack.push(layer);
        }
        stack
    }
}

impl From<LayerStack> for Vec<GradientLayer> {
    fn from(stack: LayerStack) -> Self {
        stack.entries.into_iter().map(|(_, l)| l).collect()
    }
}

impl FromIterator<GradientLayer> for LayerStack {
    fn from_iter<I: IntoIterator<Item = GradientLayer>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
