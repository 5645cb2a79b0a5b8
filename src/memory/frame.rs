//! The demonstration's activation record
//!
//! This module provides the single stack frame the demonstration runs in:
//! - [`Frame`]: named locals plus their declaration order
//! - [`LocalVar`]: a local variable with its value and virtual address
//!
//! # Layout
//!
//! Locals are placed back to back starting at [`STACK_ADDRESS_START`], each
//! occupying `sizeof` of its type. There is no padding or alignment.

use super::value::{Address, Value};
use crate::constants::STACK_ADDRESS_START;
use crate::errors::DemoError;
use crate::types::PrimType;
use rustc_hash::FxHashMap;

/// Local variable in the frame
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub value: Value,
    pub address: Address,
}

impl LocalVar {
    pub fn prim_type(&self) -> PrimType {
        self.value.prim_type()
    }

    pub fn size(&self) -> usize {
        self.value.size()
    }
}

/// Stack frame holding every demonstrated value
#[derive(Debug, Clone)]
pub struct Frame {
    pub function_name: String,
    locals: FxHashMap<String, LocalVar>,
    insertion_order: Vec<String>, // Track order of variable declarations
    next_address: Address,
}

impl Frame {
    pub fn new(function_name: impl Into<String>) -> Self {
        Frame {
            function_name: function_name.into(),
            locals: FxHashMap::default(),
            insertion_order: Vec::new(),
            next_address: STACK_ADDRESS_START,
        }
    }

    /// Declare a new local variable and return its address
    pub fn declare(&mut self, name: &str, value: Value) -> Result<Address, DemoError> {
        if self.locals.contains_key(name) {
            return Err(DemoError::DuplicateVariable {
                name: name.to_string(),
            });
        }

        let address = self.next_address;
        self.next_address += value.size() as Address;
        self.locals
            .insert(name.to_string(), LocalVar { value, address });
        self.insertion_order.push(name.to_string());
        Ok(address)
    }

    /// Get a local variable
    pub fn get(&self, name: &str) -> Option<&LocalVar> {
        self.locals.get(name)
    }

    /// Get a local variable, or an error naming it
    pub fn lookup(&self, name: &str) -> Result<&LocalVar, DemoError> {
        self.get(name).ok_or_else(|| DemoError::UnknownVariable {
            name: name.to_string(),
        })
    }

    /// Locals in declaration order
    pub fn locals(&self) -> impl Iterator<Item = (&str, &LocalVar)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.locals.get(name).map(|var| (name.as_str(), var)))
    }

    /// Number of declared locals
    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }

    /// Sum of the sizes of all locals
    pub fn total_size(&self) -> usize {
        self.locals.values().map(LocalVar::size).sum()
    }
}
