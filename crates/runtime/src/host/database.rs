//! Host containers.

use stamina_content::GlobalsDocument;
use stamina_core::{AdjustmentEvent, NotificationSink, StaminaParameters};

use super::{HostServices, ModContainer};
use crate::error::{Result, RuntimeError};
use crate::notify::TracingSink;

/// Container backed by the host's globals document.
///
/// The stamina table is the object at the document's stamina pointer.
/// Notifications go to `S`, which defaults to the tracing sink.
#[derive(Debug)]
pub struct DatabaseServer<S = TracingSink> {
    globals: GlobalsDocument,
    sink: S,
}

impl DatabaseServer {
    pub fn new(globals: GlobalsDocument) -> Self {
        Self::with_sink(globals, TracingSink)
    }
}

impl<S> DatabaseServer<S> {
    pub fn with_sink(globals: GlobalsDocument, sink: S) -> Self {
        Self { globals, sink }
    }

    pub fn globals(&self) -> &GlobalsDocument {
        &self.globals
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (GlobalsDocument, S) {
        (self.globals, self.sink)
    }
}

impl<S: NotificationSink + Send> ModContainer for DatabaseServer<S> {
    fn resolve(&mut self) -> Result<HostServices<'_>> {
        let table = self
            .globals
            .stamina_mut()
            .map_err(|e| RuntimeError::TableUnavailable(e.to_string()))?;

        Ok(HostServices {
            table: Box::new(table),
            notifications: &mut self.sink,
        })
    }
}

/// Container holding a typed stamina record and recording every notification.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub parameters: StaminaParameters,
    pub events: Vec<AdjustmentEvent>,
}

impl MemoryHost {
    pub fn new(parameters: StaminaParameters) -> Self {
        Self {
            parameters,
            events: Vec::new(),
        }
    }
}

impl ModContainer for MemoryHost {
    fn resolve(&mut self) -> Result<HostServices<'_>> {
        Ok(HostServices {
            table: Box::new(&mut self.parameters),
            notifications: &mut self.events,
        })
    }
}
