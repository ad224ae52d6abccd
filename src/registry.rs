//! Extension registry.
//!
//! Holds the extensions bound to each unit, one list per render slot, kept
//! in paint order. The registry is an explicit value owned by the app and
//! passed where it is needed; there is no process-wide instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetGlyphError};
use crate::extension::SheetExtension;
use crate::layout::SheetSkeleton;
use crate::render::{RenderingContext, Scale};

/// Render pass an extension hooks into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionSlot {
    /// Cell area
    Main,
    /// Row header band (left)
    RowHeader,
    /// Column header band (top)
    ColumnHeader,
}

impl ExtensionSlot {
    /// Slots in the order the host paints them within a frame
    pub const ALL: [ExtensionSlot; 3] = [Self::Main, Self::RowHeader, Self::ColumnHeader];
}

struct Entry {
    seq: u64,
    extension: Box<dyn SheetExtension>,
}

#[derive(Default)]
struct UnitExtensions {
    slots: HashMap<ExtensionSlot, Vec<Entry>>,
    next_seq: u64,
}

/// Extensions per (unit, slot)
#[derive(Default)]
pub struct ExtensionRegistry {
    units: HashMap<String, UnitExtensions>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a unit available for registration
    pub fn add_unit(&mut self, unit_id: &str) -> Result<()> {
        if self.units.contains_key(unit_id) {
            return Err(SheetGlyphError::DuplicateUnit(unit_id.to_string()));
        }
        self.units
            .insert(unit_id.to_string(), UnitExtensions::default());
        Ok(())
    }

    pub fn has_unit(&self, unit_id: &str) -> bool {
        self.units.contains_key(unit_id)
    }

    /// Bind an extension to a unit's slot.
    ///
    /// An extension with the same key in the same slot is replaced and
    /// returned; the replacement keeps the original registration order.
    pub fn register(
        &mut self,
        unit_id: &str,
        slot: ExtensionSlot,
        extension: Box<dyn SheetExtension>,
    ) -> Result<Option<Box<dyn SheetExtension>>> {
        if extension.key().is_empty() {
            return Err(SheetGlyphError::InvalidExtension(
                "extension key must not be empty".to_string(),
            ));
        }
        let unit = self
            .units
            .get_mut(unit_id)
            .ok_or_else(|| SheetGlyphError::UnknownUnit(unit_id.to_string()))?;

        let key = extension.key().to_string();
        let z_index = extension.z_index();
        let entries = unit.slots.entry(slot).or_default();

        let replaced = match entries.iter_mut().find(|e| e.extension.key() == key) {
            Some(existing) => Some(std::mem::replace(&mut existing.extension, extension)),
            None => {
                entries.push(Entry {
                    seq: unit.next_seq,
                    extension,
                });
                unit.next_seq += 1;
                None
            }
        };
        entries.sort_by_key(|e| (e.extension.z_index(), e.seq));

        tracing::debug!(
            unit_id,
            ?slot,
            key = %key,
            z_index,
            replaced = replaced.is_some(),
            "extension registered"
        );
        Ok(replaced)
    }

    /// Remove an extension by key
    pub fn unregister(
        &mut self,
        unit_id: &str,
        slot: ExtensionSlot,
        key: &str,
    ) -> Option<Box<dyn SheetExtension>> {
        let entries = self.units.get_mut(unit_id)?.slots.get_mut(&slot)?;
        let pos = entries.iter().position(|e| e.extension.key() == key)?;
        Some(entries.remove(pos).extension)
    }

    /// Keys registered in a slot, in paint order
    pub fn keys(&self, unit_id: &str, slot: ExtensionSlot) -> Vec<&str> {
        self.units
            .get(unit_id)
            .and_then(|unit| unit.slots.get(&slot))
            .map(|entries| entries.iter().map(|e| e.extension.key()).collect())
            .unwrap_or_default()
    }

    /// Invoke every extension in a slot, lowest z-index first.
    ///
    /// Each draw runs between `save`/`restore` so transforms and styles set
    /// by one extension never leak into the next. Returns how many
    /// extensions were invoked.
    pub fn paint(
        &self,
        unit_id: &str,
        slot: ExtensionSlot,
        ctx: &mut dyn RenderingContext,
        scale: Scale,
        skeleton: &SheetSkeleton,
    ) -> usize {
        let Some(entries) = self
            .units
            .get(unit_id)
            .and_then(|unit| unit.slots.get(&slot))
        else {
            return 0;
        };

        for entry in entries {
            ctx.save();
            entry.extension.draw(ctx, scale, skeleton);
            ctx.restore();
        }
        entries.len()
    }

    /// Paint all slots of a unit in host order
    pub fn paint_frame(
        &self,
        unit_id: &str,
        ctx: &mut dyn RenderingContext,
        scale: Scale,
        skeleton: &SheetSkeleton,
    ) -> usize {
        ExtensionSlot::ALL
            .iter()
            .map(|&slot| self.paint(unit_id, slot, ctx, scale, skeleton))
            .sum()
    }
}
