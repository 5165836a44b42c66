//! Editing operations for the canvas.
//!
//! This module provides the canvas-mutation operations used by the editor
//! state. Each operation works directly on a [`Canvas`] and returns an
//! [`EditorCommand`] that can be recorded for undo/redo.
//!
//! # Design
//!
//! Operations mutate the canvas in-place. The [`EditorHistory`] struct wraps
//! them with undo/redo support by storing inverse commands.

use crate::error::EditorResult;
use crate::model::{BlockId, InsertionPoint, PlacedBlock};

use super::canvas::Canvas;

// ────────────────────────────────────────────────────────────────────────────
// Editor Command (undo/redo unit)
// ────────────────────────────────────────────────────────────────────────────

/// A single undoable canvas operation.
///
/// Each variant captures enough state to reverse the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// A block was inserted at `index`.
    Insert { index: usize, block: PlacedBlock },
    /// A block was removed from `index`.
    Remove { index: usize, block: PlacedBlock },
    /// A block moved from index `from` to index `to`.
    Move { id: BlockId, from: usize, to: usize },
    /// The canvas was cleared; `blocks` is the previous content in order.
    Clear { blocks: Vec<PlacedBlock> },
    /// The canvas was refilled with `blocks` (inverse of `Clear`).
    Restore { blocks: Vec<PlacedBlock> },
}

// ────────────────────────────────────────────────────────────────────────────
// Editor History (undo / redo stack)
// ────────────────────────────────────────────────────────────────────────────

/// Undo/redo history for the editor.
///
/// # Example
///
/// ```rust,ignore
/// let mut history = EditorHistory::new(100);
/// let cmd = add_block(&mut canvas, "hero", InsertionPoint::End)?;
/// history.push(cmd);
/// history.undo(&mut canvas); // removes the hero again
/// history.redo(&mut canvas); // puts it back
/// ```
#[derive(Debug, Clone)]
pub struct EditorHistory {
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    max_size: usize,
}

impl EditorHistory {
    /// Create a new history with the given maximum undo depth.
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Push a command onto the undo stack and clear the redo stack.
    pub fn push(&mut self, cmd: EditorCommand) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last command, returning true if an undo was performed.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        if let Some(cmd) = self.undo_stack.pop() {
            let inverse = apply_inverse(canvas, &cmd);
            self.redo_stack.push(inverse);
            true
        } else {
            false
        }
    }

    /// Redo the last undone command, returning true if a redo was performed.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        if let Some(cmd) = self.redo_stack.pop() {
            let inverse = apply_inverse(canvas, &cmd);
            self.undo_stack.push(inverse);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Apply the inverse of a command to the canvas, returning the command that
/// re-applies it.
fn apply_inverse(canvas: &mut Canvas, cmd: &EditorCommand) -> EditorCommand {
    match cmd {
        EditorCommand::Insert { index, block } => {
            let _ = canvas.remove(block.id);
            EditorCommand::Remove {
                index: *index,
                block: block.clone(),
            }
        }
        EditorCommand::Remove { index, block } => {
            canvas.insert_index(*index, block.clone());
            EditorCommand::Insert {
                index: *index,
                block: block.clone(),
            }
        }
        EditorCommand::Move { id, from, to } => {
            canvas.move_to_index(*id, *from);
            EditorCommand::Move {
                id: *id,
                from: *to,
                to: *from,
            }
        }
        EditorCommand::Clear { blocks } => {
            canvas.restore(blocks.clone());
            EditorCommand::Restore {
                blocks: blocks.clone(),
            }
        }
        EditorCommand::Restore { blocks } => {
            canvas.clear();
            EditorCommand::Clear {
                blocks: blocks.clone(),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Create a block of `block_type` from the catalog and insert it at `point`.
pub fn add_block(canvas: &mut Canvas, block_type: &str, point: InsertionPoint) -> EditorResult<EditorCommand> {
    // Resolve first so a bad target does not consume an id.
    canvas.resolve(point)?;
    let block = canvas.create_block(block_type)?;
    let index = canvas.insert_at(point, block.clone())?;
    Ok(EditorCommand::Insert { index, block })
}

/// Remove one block.
pub fn delete_block(canvas: &mut Canvas, id: BlockId) -> EditorResult<EditorCommand> {
    let (index, block) = canvas.remove(id)?;
    Ok(EditorCommand::Remove { index, block })
}

/// Move an existing block to `point`.
///
/// Returns `None` when the block already sits there, so nothing is recorded.
pub fn move_block(canvas: &mut Canvas, id: BlockId, point: InsertionPoint) -> EditorResult<Option<EditorCommand>> {
    let (from, to) = canvas.reorder(id, point)?;
    if from == to {
        return Ok(None);
    }
    Ok(Some(EditorCommand::Move { id, from, to }))
}

/// Remove all blocks. Returns `None` when the canvas was already empty.
pub fn clear_canvas(canvas: &mut Canvas) -> Option<EditorCommand> {
    if canvas.is_empty() {
        return None;
    }
    Some(EditorCommand::Clear {
        blocks: canvas.clear(),
    })
}
