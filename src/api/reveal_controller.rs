use tracing::warn;

use crate::error::{ScrollError, ScrollResult};
use crate::reveal::{ElementId, IntersectionEntry};

use super::{InputController, ScrollHost};

impl<H: ScrollHost> InputController<H> {
    /// Registers a marked element. Returns `false` if it was already observed.
    pub fn observe_element(&mut self, element: ElementId) -> bool {
        self.reveal.observe(element)
    }

    #[must_use]
    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.reveal.is_revealed(element)
    }

    /// Applies an observer batch and flags newly revealed elements on the host.
    ///
    /// Returns the number of elements revealed by this batch.
    pub fn intersections(&mut self, entries: &[IntersectionEntry]) -> ScrollResult<usize> {
        let revealed = self.reveal.process(entries);
        let mut first_error: Option<ScrollError> = None;
        for element in &revealed {
            if let Err(err) = self.host.mark_revealed(*element) {
                warn!(error = %err, element = element.0, "failed to flag revealed element");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(revealed.len()),
        }
    }
}
