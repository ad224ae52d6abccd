//! API handle over an `App`.

use super::App;
use crate::error::Result;
use crate::extension::SheetExtension;
use crate::layout::SheetSkeleton;
use crate::registry::ExtensionSlot;
use crate::render::{RenderingContext, Scale};

/// Borrowed handle used to bind extensions to units and paint frames
pub struct Facade<'a> {
    app: &'a mut App,
}

impl<'a> Facade<'a> {
    pub(super) fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Bind an extension to the row header pass of `unit_id`
    pub fn register_sheet_row_header_extension(
        &mut self,
        unit_id: &str,
        extension: impl SheetExtension + 'static,
    ) -> Result<()> {
        self.register(unit_id, ExtensionSlot::RowHeader, extension)
    }

    /// Bind an extension to the column header pass of `unit_id`
    pub fn register_sheet_column_header_extension(
        &mut self,
        unit_id: &str,
        extension: impl SheetExtension + 'static,
    ) -> Result<()> {
        self.register(unit_id, ExtensionSlot::ColumnHeader, extension)
    }

    /// Bind an extension to the main (cell area) pass of `unit_id`
    pub fn register_sheet_main_extension(
        &mut self,
        unit_id: &str,
        extension: impl SheetExtension + 'static,
    ) -> Result<()> {
        self.register(unit_id, ExtensionSlot::Main, extension)
    }

    fn register(
        &mut self,
        unit_id: &str,
        slot: ExtensionSlot,
        extension: impl SheetExtension + 'static,
    ) -> Result<()> {
        self.app
            .registry
            .register(unit_id, slot, Box::new(extension))
            .map(|_| ())
    }

    /// Paint every registered extension of `unit_id` for one frame.
    ///
    /// Returns the number of extensions invoked.
    pub fn render_unit(
        &self,
        unit_id: &str,
        ctx: &mut dyn RenderingContext,
        scale: Scale,
        skeleton: &SheetSkeleton,
    ) -> usize {
        self.app.registry.paint_frame(unit_id, ctx, scale, skeleton)
    }
}
