use growable_array::{ArrayConfig, ArrayError, GrowableArray};
use itertools::Itertools;
use miette::Diagnostic;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,
    #[error(transparent)]
    #[diagnostic(transparent)]
    Array(#[from] ArrayError),
}

/// LIFO stack over a [GrowableArray]; the top is the array's last element.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    array: GrowableArray<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            array: GrowableArray::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            array: GrowableArray::with_capacity(capacity),
        }
    }

    pub fn from_config(config: &ArrayConfig) -> Self {
        Self {
            array: GrowableArray::from_config(config),
        }
    }

    pub fn size(&self) -> usize {
        self.array.size()
    }

    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Only fails when the stack is backed by a full fixed array.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        Ok(self.array.append(value)?)
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.array.remove_last().map_err(|err| match err {
            ArrayError::IndexOutOfRange { .. } => StackError::Empty,
            err => StackError::Array(err),
        })
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.array.last().ok_or(StackError::Empty)
    }

    /// Elements from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] top", self.array.iter().join(","))
    }
}
