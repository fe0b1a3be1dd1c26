use indexmap::map::Entry;

use crate::error::{WidgetError, WidgetResult};
use crate::extensions::WidgetPlugin;
use crate::render::DisplayRegion;

use super::Controller;

impl<R: DisplayRegion> Controller<R> {
    /// Registers a plugin under its id. Plugins hear events in registration
    /// order.
    pub fn register_plugin(&mut self, plugin: Box<dyn WidgetPlugin>) -> WidgetResult<()> {
        let id = plugin.id().to_owned();
        if id.is_empty() {
            return Err(WidgetError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        match self.plugins.entry(id) {
            Entry::Occupied(entry) => Err(WidgetError::InvalidData(format!(
                "plugin `{}` is already registered",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(plugin);
                Ok(())
            }
        }
    }

    /// Removes a plugin, keeping the order of the rest. Returns `true` when
    /// one was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }
}
