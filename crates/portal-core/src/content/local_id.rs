use super::model::ItemId;

/// Hands out ids for items authored during the current session.
///
/// Ids count down from -1. Provider ids are positive, so a local id can
/// never collide with one the provider issued.
#[derive(Debug, Clone)]
pub struct LocalIdAllocator {
    next: ItemId,
}

impl LocalIdAllocator {
    pub fn new() -> Self {
        Self { next: -1 }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = self.next;
        self.next -= 1;
        id
    }
}

impl Default for LocalIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
