//! The canvas: an ordered sequence of placed blocks.
//!
//! [`Canvas`] is the single source of truth for block order. Rendering reads
//! it (see [`crate::generator::html`]) and never feeds order back into it.

use crate::error::{EditorError, EditorResult};
use crate::model::{BlockId, BlockTypeId, InsertionPoint, PlacedBlock};

use super::block_catalog;

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    blocks: Vec<PlacedBlock>,
    next_id: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks in display order.
    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// An empty canvas shows the placeholder instead of blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    pub fn block_types(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.block_type.as_str()).collect()
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn get(&self, id: BlockId) -> Option<&PlacedBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Create a new block from the catalog template of `block_type`.
    ///
    /// The block gets a fresh id but is not placed yet; pass it to
    /// [`Canvas::insert_at`].
    pub fn create_block(&mut self, block_type: &str) -> EditorResult<PlacedBlock> {
        let template = block_catalog::lookup_template(block_type)
            .ok_or_else(|| EditorError::unknown_block_type(block_type))?;
        let id = BlockId(self.next_id);
        // Saturates once a caller has placed `u64::MAX`; insert then rejects the duplicate.
        self.next_id = self.next_id.saturating_add(1);
        Ok(PlacedBlock {
            id,
            block_type: BlockTypeId::new(block_type),
            content: template.clone(),
        })
    }

    /// Resolve an insertion point to an index into the current sequence.
    pub fn resolve(&self, point: InsertionPoint) -> EditorResult<usize> {
        match point {
            InsertionPoint::End => Ok(self.blocks.len()),
            InsertionPoint::Before(id) => self.index_of(id).ok_or(EditorError::BlockNotFound(id)),
        }
    }

    /// Insert a block at the given point, returning its index.
    pub fn insert_at(&mut self, point: InsertionPoint, block: PlacedBlock) -> EditorResult<usize> {
        if self.index_of(block.id).is_some() {
            return Err(EditorError::DuplicateBlock(block.id));
        }
        let index = self.resolve(point)?;
        tracing::debug!(id = %block.id, block_type = %block.block_type, index, "insert block");
        self.insert_index(index, block);
        Ok(index)
    }

    /// Remove a block, returning its former index and the block.
    pub fn remove(&mut self, id: BlockId) -> EditorResult<(usize, PlacedBlock)> {
        let index = self.index_of(id).ok_or(EditorError::BlockNotFound(id))?;
        let block = self.blocks.remove(index);
        tracing::debug!(id = %id, index, remaining = self.blocks.len(), "remove block");
        Ok((index, block))
    }

    /// Move an existing block to a new point, returning `(from, to)` indices.
    ///
    /// Moving a block before itself leaves the order unchanged.
    pub fn reorder(&mut self, id: BlockId, point: InsertionPoint) -> EditorResult<(usize, usize)> {
        let from = self.index_of(id).ok_or(EditorError::BlockNotFound(id))?;
        if point == InsertionPoint::Before(id) {
            return Ok((from, from));
        }
        // Validate the target before touching the sequence.
        self.resolve(point)?;
        let block = self.blocks.remove(from);
        let to = self.resolve(point)?;
        self.blocks.insert(to, block);
        tracing::debug!(id = %id, from, to, "reorder block");
        Ok((from, to))
    }

    /// Remove all blocks, returning them in their previous order.
    pub fn clear(&mut self) -> Vec<PlacedBlock> {
        tracing::debug!(count = self.blocks.len(), "clear canvas");
        std::mem::take(&mut self.blocks)
    }

    /// Insert at a raw index (clamped to the sequence length).
    pub(crate) fn insert_index(&mut self, index: usize, block: PlacedBlock) {
        self.next_id = self.next_id.max(block.id.0.saturating_add(1));
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Move a block to a raw index (clamped). Used when replaying history.
    pub(crate) fn move_to_index(&mut self, id: BlockId, index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let block = self.blocks.remove(from);
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
        true
    }

    /// Replace the contents with previously cleared blocks.
    pub(crate) fn restore(&mut self, blocks: Vec<PlacedBlock>) {
        self.blocks.clear();
        for block in blocks {
            let end = self.blocks.len();
            self.insert_index(end, block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_with(types: &[&str]) -> (Canvas, Vec<BlockId>) {
        let mut canvas = Canvas::new();
        let mut ids = Vec::new();
        for t in types {
            let b = canvas.create_block(t).unwrap();
            ids.push(b.id);
            canvas.insert_at(InsertionPoint::End, b).unwrap();
        }
        (canvas, ids)
    }

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = Canvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.len(), 0);
    }

    #[test]
    fn test_insert_before_existing() {
        let mut canvas = Canvas::new();
        let hero = canvas.create_block("hero").unwrap();
        let hero_id = hero.id;
        canvas.insert_at(InsertionPoint::End, hero).unwrap();
        let header = canvas.create_block("header").unwrap();
        let idx = canvas.insert_at(InsertionPoint::Before(hero_id), header).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(canvas.block_types(), vec!["header", "hero"]);
    }

    #[test]
    fn test_create_block_unknown_type() {
        let mut canvas = Canvas::new();
        let err = canvas.create_block("nonexistent-widget").unwrap_err();
        assert_eq!(err, EditorError::UnknownBlockType("nonexistent-widget".into()));
    }

    #[test]
    fn test_ids_are_unique() {
        let (canvas, ids) = canvas_with(&["hero", "hero", "hero"]);
        assert_eq!(canvas.len(), 3);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let (mut canvas, _) = canvas_with(&["hero"]);
        let dup = canvas.blocks()[0].clone();
        let err = canvas.insert_at(InsertionPoint::End, dup).unwrap_err();
        assert!(matches!(err, EditorError::DuplicateBlock(_)));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_insert_before_missing_block() {
        let mut canvas = Canvas::new();
        let b = canvas.create_block("hero").unwrap();
        let err = canvas.insert_at(InsertionPoint::Before(BlockId(99)), b).unwrap_err();
        assert_eq!(err, EditorError::BlockNotFound(BlockId(99)));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_remove() {
        let (mut canvas, ids) = canvas_with(&["header", "hero", "footer"]);
        let (idx, removed) = canvas.remove(ids[1]).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(removed.block_type.as_str(), "hero");
        assert_eq!(canvas.block_types(), vec!["header", "footer"]);
        assert!(canvas.remove(ids[1]).is_err());
    }

    #[test]
    fn test_reorder_to_front() {
        let (mut canvas, ids) = canvas_with(&["header", "hero", "footer"]);
        let (from, to) = canvas.reorder(ids[1], InsertionPoint::Before(ids[0])).unwrap();
        assert_eq!((from, to), (1, 0));
        assert_eq!(canvas.ids(), vec![ids[1], ids[0], ids[2]]);
    }

    #[test]
    fn test_reorder_to_end() {
        let (mut canvas, ids) = canvas_with(&["header", "hero", "footer"]);
        let (from, to) = canvas.reorder(ids[0], InsertionPoint::End).unwrap();
        assert_eq!((from, to), (0, 2));
        assert_eq!(canvas.ids(), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_reorder_before_self_is_noop() {
        let (mut canvas, ids) = canvas_with(&["header", "hero"]);
        let (from, to) = canvas.reorder(ids[1], InsertionPoint::Before(ids[1])).unwrap();
        assert_eq!(from, to);
        assert_eq!(canvas.ids(), ids);
    }

    #[test]
    fn test_reorder_invalid_target_leaves_order() {
        let (mut canvas, ids) = canvas_with(&["header", "hero"]);
        assert!(canvas.reorder(ids[0], InsertionPoint::Before(BlockId(42))).is_err());
        assert_eq!(canvas.ids(), ids);
    }

    #[test]
    fn test_clear_and_restore() {
        let (mut canvas, ids) = canvas_with(&["header", "footer"]);
        let removed = canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(removed.len(), 2);
        canvas.restore(removed);
        assert_eq!(canvas.ids(), ids);
    }

    #[test]
    fn test_insert_max_id_does_not_overflow() {
        let mut canvas = Canvas::new();
        let mut block = canvas.create_block("hero").unwrap();
        block.id = BlockId(u64::MAX);
        canvas.insert_at(InsertionPoint::End, block).unwrap();
        assert_eq!(canvas.ids(), vec![BlockId(u64::MAX)]);

        let next = canvas.create_block("footer").unwrap();
        assert_eq!(next.id, BlockId(u64::MAX));
        let err = canvas.insert_at(InsertionPoint::End, next).unwrap_err();
        assert_eq!(err, EditorError::DuplicateBlock(BlockId(u64::MAX)));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let (mut canvas, ids) = canvas_with(&["header"]);
        canvas.clear();
        let b = canvas.create_block("hero").unwrap();
        assert!(b.id > ids[0]);
    }
}
