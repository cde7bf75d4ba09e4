//! [CSS Painting API § 3 Paint Worklet](https://www.w3.org/TR/css-paint-api-1/#paint-worklet)

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::context::PaintRenderingContext2D;
use super::painter::BorderRadiusReversePainter;
use crate::error::PaintError;
use crate::properties::StylePropertyMap;
use crate::radius::BoxGeometry;

/// A named painter.
///
/// [§ 3.1 The PaintWorkletGlobalScope](https://www.w3.org/TR/css-paint-api-1/#paint-definition)
///
/// "A paint definition is a struct which describes the information needed by
/// the PaintWorkletGlobalScope about the author defined paint."
pub trait PaintDefinition {
    /// Properties the painter reads. Only these are visible in `paint`.
    fn input_properties(&self) -> &[&'static str];

    /// Draw into `context` for a box of size `geometry`.
    ///
    /// # Errors
    ///
    /// Returns an error when the properties cannot produce a drawing; the host
    /// decides whether to skip the paint.
    fn paint(
        &self,
        context: &mut dyn PaintRenderingContext2D,
        geometry: BoxGeometry,
        props: &StylePropertyMap,
    ) -> Result<(), PaintError>;
}

/// Registry of paint definitions by name.
#[derive(Default)]
pub struct PaintWorkletGlobalScope {
    definitions: HashMap<String, Box<dyn PaintDefinition>>,
}

impl PaintWorkletGlobalScope {
    /// Create a scope with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope with `border-radius-reverse` registered.
    #[must_use]
    pub fn with_builtin_painters() -> Self {
        let mut scope = Self::new();
        let _ = scope.definitions.insert(
            BorderRadiusReversePainter::NAME.to_string(),
            Box::new(BorderRadiusReversePainter),
        );
        scope
    }

    /// [§ 3.2 registerPaint](https://www.w3.org/TR/css-paint-api-1/#dom-paintworkletglobalscope-registerpaint)
    ///
    /// # Errors
    ///
    /// "If name is an empty string, throw a TypeError and abort all these
    /// steps." Returns [`PaintError::EmptyPaintName`].
    ///
    /// "If paint definitions contains an entry with key name, throw an
    /// InvalidModificationError and abort all these steps." Returns
    /// [`PaintError::DuplicatePaintName`].
    pub fn register_paint(
        &mut self,
        name: impl Into<String>,
        definition: impl PaintDefinition + 'static,
    ) -> Result<(), PaintError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PaintError::EmptyPaintName);
        }
        match self.definitions.entry(name) {
            Entry::Occupied(slot) => Err(PaintError::DuplicatePaintName(slot.key().clone())),
            Entry::Vacant(slot) => {
                let _ = slot.insert(Box::new(definition));
                Ok(())
            }
        }
    }

    /// The definition registered under `name`.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&dyn PaintDefinition> {
        self.definitions.get(name).map(Box::as_ref)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// [§ 4 Paint Invocation](https://www.w3.org/TR/css-paint-api-1/#paint-invocation)
    ///
    /// Run the paint registered as `name`, showing it only the properties it
    /// declared.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::UnknownPaint`] if nothing is registered as
    /// `name`, or whatever the definition's `paint` returns.
    pub fn invoke(
        &self,
        name: &str,
        context: &mut dyn PaintRenderingContext2D,
        geometry: BoxGeometry,
        props: &StylePropertyMap,
    ) -> Result<(), PaintError> {
        let definition = self
            .definition(name)
            .ok_or_else(|| PaintError::UnknownPaint(name.to_string()))?;
        let visible = props.project(definition.input_properties());
        definition.paint(context, geometry, &visible)
    }
}
