//! Upward navigation over parent-free trees.

use crate::{ExprError, Expression};

/// A focus on one node of a tree, together with the path from the root.
///
/// Nodes do not know their parents; the cursor does. Moving and editing
/// return new cursors, and an edit rebuilds only the nodes on the path.
#[derive(Clone, Debug)]
pub struct ExpressionCursor {
    /// `(ancestor, index of the next node down within it)`, root first.
    path: Vec<(Expression, usize)>,
    focus: Expression,
}

impl ExpressionCursor {
    /// A cursor on `root`.
    pub fn new(root: Expression) -> Self {
        Self {
            path: Vec::new(),
            focus: root,
        }
    }

    /// The focused node.
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.focus
    }

    /// The focused node's parent, if it is not the root.
    pub fn parent_expression(&self) -> Option<&Expression> {
        self.path.last().map(|(parent, _)| parent)
    }

    /// A cursor on the parent, if any.
    pub fn parent(&self) -> Option<Self> {
        let mut path = self.path.clone();
        let (parent, _) = path.pop()?;
        Some(Self {
            path,
            focus: parent,
        })
    }

    /// A cursor on the child at `index`.
    pub fn child(&self, index: usize) -> Result<Self, ExprError> {
        let child = self
            .focus
            .child(index)
            .ok_or(ExprError::ChildIndex {
                expression: self.focus.display_name(),
                index,
                len: self.focus.children().len(),
            })?
            .clone();
        let mut path = self.path.clone();
        path.push((self.focus.clone(), index));
        Ok(Self { path, focus: child })
    }

    /// Distance from the root; zero at the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Position of the focus among its parent's children.
    pub fn index(&self) -> Option<usize> {
        self.path.last().map(|(_, index)| *index)
    }

    /// The root of the tree the cursor walks.
    pub fn root(&self) -> &Expression {
        self.path.first().map_or(&self.focus, |(root, _)| root)
    }

    /// Ancestors of the focus, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Expression> {
        self.path.iter().rev().map(|(ancestor, _)| ancestor)
    }

    /// Put `new` in place of the focus.
    ///
    /// Every ancestor is rebuilt copy-on-write; the returned cursor focuses
    /// `new` within the new root. The original tree is unchanged.
    pub fn replace(&self, new: Expression) -> Result<Self, ExprError> {
        let mut current = new.clone();
        let mut path = Vec::with_capacity(self.path.len());
        for (ancestor, index) in self.path.iter().rev() {
            current = ancestor.with_child(*index, current)?;
            path.push((current.clone(), *index));
        }
        path.reverse();
        Ok(Self { path, focus: new })
    }

    /// Detach the focus from its ancestors, returning it as a standalone
    /// root.
    pub fn remove_parent(self) -> Expression {
        self.focus
    }
}
