//! Transient image attachments and their preview references.
//!
//! A [`PreviewRef`] is an owned handle: it is issued by a
//! [`PreviewRegistry`] and released when dropped, so every exit path of the
//! owning slot (replace, clear, workflow teardown, cancellation) releases it
//! exactly once.

use std::{
    collections::BTreeMap,
    fmt,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use log::debug;

use crate::error::{BeauteError, Result};

/// The two independent image slots of a plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKind {
    /// The aspirational look the user wants to reach
    Goal,
    /// The user's current state
    Current,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Goal => "goal",
            SlotKind::Current => "current",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image picked by the user. Contents are neither validated nor
/// transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads an image from disk.
    ///
    /// # Errors
    ///
    /// Returns `BeauteError::FileSystem` if the file cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| BeauteError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    next_id: u64,
    live: BTreeMap<u64, SlotKind>,
    released: u64,
    overlaps: u64,
}

/// Issues preview references and keeps count of the live ones.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues a preview for `file` in `slot`.
    pub fn issue(&self, slot: SlotKind, file: &ImageFile) -> PreviewRef {
        let mut state = self.lock();
        if state.live.values().any(|s| *s == slot) {
            state.overlaps += 1;
        }
        state.next_id += 1;
        let id = state.next_id;
        state.live.insert(id, slot);
        debug!(
            "Issued preview {id} for {slot} image '{}' ({} bytes)",
            file.name,
            file.bytes.len()
        );

        PreviewRef {
            id,
            slot,
            registry: self.clone(),
        }
    }

    fn release(&self, id: u64) {
        let mut state = self.lock();
        if state.live.remove(&id).is_some() {
            state.released += 1;
            debug!("Released preview {id}");
        }
    }

    /// Number of previews issued and not yet released.
    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }

    /// Number of previews released so far.
    pub fn released_count(&self) -> u64 {
        self.lock().released
    }

    /// How many times a preview was issued while its slot still held a live
    /// one. Stays zero as long as slots release before re-issuing.
    pub fn overlap_count(&self) -> u64 {
        self.lock().overlaps
    }
}

/// A renderable reference to an attached image. Released on drop.
#[derive(Debug)]
pub struct PreviewRef {
    id: u64,
    slot: SlotKind,
    registry: PreviewRegistry,
}

impl PreviewRef {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn slot(&self) -> SlotKind {
        self.slot
    }

    /// Locator a renderer can use to show the preview.
    pub fn uri(&self) -> String {
        format!("preview://{}/{}", self.slot, self.id)
    }
}

impl Drop for PreviewRef {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// An attached image together with its preview.
#[derive(Debug)]
pub struct ImageAttachment {
    file: ImageFile,
    preview: PreviewRef,
}

impl ImageAttachment {
    pub fn file(&self) -> &ImageFile {
        &self.file
    }

    pub fn preview(&self) -> &PreviewRef {
        &self.preview
    }
}

/// Holds at most one image for one [`SlotKind`].
#[derive(Debug)]
pub struct AttachmentSlot {
    kind: SlotKind,
    registry: PreviewRegistry,
    attachment: Option<ImageAttachment>,
}

impl AttachmentSlot {
    pub fn new(kind: SlotKind, registry: PreviewRegistry) -> Self {
        Self {
            kind,
            registry,
            attachment: None,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Replaces the slot's image. The previous preview is released before
    /// the new one is issued.
    pub fn attach(&mut self, file: ImageFile) -> &ImageAttachment {
        drop(self.attachment.take());
        let preview = self.registry.issue(self.kind, &file);
        self.attachment.insert(ImageAttachment { file, preview })
    }

    /// Empties the slot, releasing its preview. Returns whether an image was
    /// attached.
    pub fn clear(&mut self) -> bool {
        self.attachment.take().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn attachment(&self) -> Option<&ImageAttachment> {
        self.attachment.as_ref()
    }
}
