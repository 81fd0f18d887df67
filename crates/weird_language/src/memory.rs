//! Scoped variable storage.
//!
//! Memory is a stack of frames. Lookups search from the innermost frame
//! outward; the root frame holds globals and can never be popped.

use std::collections::HashMap;

use tracing::debug;
use weird_foundation::{Error, ErrorKind, Name, Result, Value};

type Frame = HashMap<Name, Value>;

/// Stack of scope frames. The root frame is `frames[0]`, the innermost is last.
#[derive(Debug, Clone)]
pub struct Memory {
    frames: Vec<Frame>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates memory with only the root frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    /// Number of frames, including the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Looks up `name` in the nearest frame that binds it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if no frame binds `name`.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .ok_or_else(|| Error::invalid_reference(name))
    }

    /// Mutable access to the nearest binding of `name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if no frame binds `name`.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
            .ok_or_else(|| Error::invalid_reference(name))
    }

    /// Binds `name` in the innermost frame.
    ///
    /// # Errors
    ///
    /// Returns `StoreIdentifier` if `value` is an identifier.
    pub fn local_set(&mut self, name: Name, value: Value) -> Result<()> {
        check_storable(&name, &value)?;
        self.innermost().insert(name, value);
        Ok(())
    }

    /// Rebinds `name` in the nearest frame that already binds it, or binds it
    /// in the root frame.
    ///
    /// # Errors
    ///
    /// Returns `StoreIdentifier` if `value` is an identifier.
    pub fn set(&mut self, name: Name, value: Value) -> Result<()> {
        check_storable(&name, &value)?;
        let index = self
            .frames
            .iter()
            .rposition(|frame| frame.contains_key(&name))
            .unwrap_or(0);
        self.frames[index].insert(name, value);
        Ok(())
    }

    /// Rebinds `name` in the nearest frame that already binds it, or binds it
    /// in the innermost frame.
    ///
    /// Loop items use this, so an item named like an outer variable
    /// overwrites that variable.
    ///
    /// # Errors
    ///
    /// Returns `StoreIdentifier` if `value` is an identifier.
    pub fn set_or_local(&mut self, name: Name, value: Value) -> Result<()> {
        check_storable(&name, &value)?;
        match self.frames.iter().rposition(|frame| frame.contains_key(&name)) {
            Some(index) => self.frames[index].insert(name, value),
            None => self.innermost().insert(name, value),
        };
        Ok(())
    }

    /// Pushes an empty innermost frame.
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::new());
        debug!(depth = self.depth(), "pushed frame");
    }

    /// Removes the innermost frame and its bindings.
    ///
    /// # Errors
    ///
    /// Returns `PopRootFrame` if only the root frame remains.
    pub fn pop_frame(&mut self) -> Result<()> {
        if self.frames.len() == 1 {
            return Err(Error::new(ErrorKind::PopRootFrame));
        }
        self.frames.pop();
        debug!(depth = self.depth(), "popped frame");
        Ok(())
    }

    fn innermost(&mut self) -> &mut Frame {
        // The root frame is never removed, so there is always a last frame.
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

fn check_storable(name: &str, value: &Value) -> Result<()> {
    if value.is_ident() {
        return Err(Error::new(ErrorKind::StoreIdentifier(name.to_string())));
    }
    Ok(())
}
