//! Whole-value state holder for the current description.
//!
//! Every operation builds a new [`GradientDescription`] and swaps it in; the
//! previous value goes onto a bounded undo history. Nothing hands out
//! `&mut GradientDescription`.

use rand::Rng;

use crate::model::{GradientDescription, GradientLayer, LayerId};
use crate::preset::{Preset, presets};
use crate::random;

/// Undo entries kept before the oldest is dropped.
pub const HISTORY_LIMIT: usize = 100;

pub struct DescriptionStore {
    current: GradientDescription,
    active_preset: Option<usize>,
    presets: Vec<Preset>,
    history: Vec<(GradientDescription, Option<usize>)>,
}

impl Default for DescriptionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionStore {
    /// Starts from the first built-in preset.
    pub fn new() -> Self {
        Self::with_presets(presets())
    }

    /// Starts from `presets[0]`, or the default description when empty.
    pub fn with_presets(presets: Vec<Preset>) -> Self {
        let (current, active_preset) = match presets.first() {
            Some(p) => (p.description.clone(), Some(0)),
            None => (GradientDescription::default(), None),
        };
        Self { current, active_preset, presets, history: Vec::new() }
    }

    #[inline]
    pub fn current(&self) -> &GradientDescription {
        &self.current
    }

    /// Index of the applied preset; `None` once anything was edited.
    #[inline]
    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    #[inline]
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Replaces the description with a copy changed by `update`.
    ///
    /// The result is clamped into range and clears the active preset.
    pub fn replace(&mut self, update: impl FnOnce(&mut GradientDescription)) {
        let mut next = self.current.clone();
        update(&mut next);
        self.commit(next, None);
    }

    /// Swaps in preset `index`. False when out of range.
    pub fn apply_preset(&mut self, index: usize) -> bool {
        let Some(preset) = self.presets.get(index) else {
            return false;
        };
        log::debug!("applying preset {:?}", preset.name);
        let next = preset.description.clone();
        self.commit(next, Some(index));
        true
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let next = random::randomize(&self.current, rng);
        log::debug!("randomized: {}, {}, {} at {}deg", next.color1, next.color2, next.color3, next.gradient_angle);
        self.commit(next, None);
    }

    /// Appends a default layer to the blend stack.
    ///
    /// Adding the first layer switches multi-layer blending on.
    pub fn add_layer(&mut self) -> LayerId {
        let mut next = self.current.clone();
        let id = next.gradient_layers.push(GradientLayer::default());
        if next.gradient_layers.len() == 1 {
            next.multi_layer_blending_enabled = true;
        }
        self.commit(next, None);
        id
    }

    /// Removes a layer; removing the last one switches multi-layer blending off.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let mut next = self.current.clone();
        if next.gradient_layers.remove(id).is_none() {
            return false;
        }
        if next.gradient_layers.is_empty() {
            next.multi_layer_blending_enabled = false;
        }
        self.commit(next, None);
        true
    }

    pub fn update_layer(&mut self, id: LayerId, update: impl FnOnce(&mut GradientLayer)) -> bool {
        let mut next = self.current.clone();
        if !next.gradient_layers.update(id, update) {
            return false;
        }
        self.commit(next, None);
        true
    }

    /// Restores the previous description. False when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((prev, preset)) => {
                self.current = prev;
                self.active_preset = preset;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn commit(&mut self, next: GradientDescription, preset: Option<usize>) {
        let next = next.clamped();
        let prev = std::mem::replace(&mut self.current, next);
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((prev, self.active_preset));
        self.active_preset = preset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlendMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn starts_on_first_preset() {
        let store = DescriptionStore::new();
        assert_eq!(store.active_preset(), Some(0));
        assert_eq!(store.current(), &presets()[0].description);
    }

    #[test]
    fn replace_clears_active_preset() {
        let mut store = DescriptionStore::new();
        store.replace(|d| d.gradient_angle = 10);
        assert_eq!(store.current().gradient_angle, 10);
        assert_eq!(store.active_preset(), None);
    }

    #[test]
    fn replace_clamps() {
        let mut store = DescriptionStore::new();
        store.replace(|d| d.pattern_opacity = 99);
        assert_eq!(store.current().pattern_opacity, 50);
    }

    #[test]
    fn apply_preset_sets_index() {
        let mut store = DescriptionStore::new();
        assert!(store.apply_preset(3));
        assert_eq!(store.active_preset(), Some(3));
        assert_eq!(store.current().gradient_angle, 120);
        assert!(!store.apply_preset(99));
        assert_eq!(store.active_preset(), Some(3));
    }

    #[test]
    fn undo_restores_value_and_preset() {
        let mut store = DescriptionStore::new();
        store.apply_preset(2);
        store.replace(|d| d.color1 = "#000000".into());
        assert!(store.undo());
        assert_eq!(store.current(), &presets()[2].description);
        assert_eq!(store.active_preset(), Some(2));
        assert!(store.undo());
        assert_eq!(store.active_preset(), Some(0));
        assert!(!store.undo());
    }

    #[test]
    fn history_is_bounded() {
        let mut store = DescriptionStore::new();
        for i in 0..(HISTORY_LIMIT + 20) {
            store.replace(|d| d.gradient_angle = (i % 360) as i32);
        }
        let mut undone = 0;
        while store.undo() {
            undone += 1;
        }
        assert_eq!(undone, HISTORY_LIMIT);
    }

    #[test]
    fn first_layer_enables_blending_and_last_removal_disables() {
        let mut store = DescriptionStore::new();
        let a = store.add_layer();
        assert!(store.current().multi_layer_blending_enabled);
        let b = store.add_layer();

        assert!(store.remove_layer(a));
        assert!(store.current().multi_layer_blending_enabled);
        assert!(store.remove_layer(b));
        assert!(!store.current().multi_layer_blending_enabled);
        assert!(!store.remove_layer(b));
    }

    #[test]
    fn layer_ids_survive_undo() {
        let mut store = DescriptionStore::new();
        let a = store.add_layer();
        let b = store.add_layer();

        assert!(store.update_layer(a, |l| l.opacity = 10));
        store.replace(|d| d.gradient_angle = 20);
        assert!(store.remove_layer(b));

        assert!(store.undo());
        assert_eq!(store.current().gradient_layers.position(b), Some(1));
        assert!(store.undo());
        assert!(store.undo());
        assert_eq!(store.current().gradient_layers.get(a).map(|l| l.opacity), Some(80));
        assert!(store.update_layer(b, |l| l.blend_mode = BlendMode::Hue));
        assert_eq!(store.current().gradient_layers.get(b).map(|l| l.blend_mode), Some(BlendMode::Hue));
    }

    #[test]
    fn update_layer_by_id() {
        let mut store = DescriptionStore::new();
        let id = store.add_layer();
        assert!(store.update_layer(id, |l| l.blend_mode = BlendMode::Difference));
        assert_eq!(store.current().gradient_layers.get(id).map(|l| l.blend_mode), Some(BlendMode::Difference));
    }

    #[test]
    fn randomize_clears_preset() {
        let mut store = DescriptionStore::new();
        store.randomize(&mut StdRng::seed_from_u64(9));
        assert_eq!(store.active_preset(), None);
        assert_ne!(store.current(), &presets()[0].description);
    }
}
