use crate::{
    context::{Binding, Context},
    helper::Helper,
};
use serde_json::Value;
use std::borrow::Cow;

/// Name bound to the current element of an "each" block.
pub const THIS: &str = "@this";
/// Name bound to the position of the current element when iterating a sequence.
pub const INDEX: &str = "@index";
/// Name bound to the key of the current entry when iterating a mapping.
pub const KEY: &str = "@key";

/// What a name resolved to.
pub enum Resolved<'a> {
    /// Plain data.
    Value(Cow<'a, Value>),
    /// A callable helper.
    Helper(&'a dyn Helper),
}

/// The bindings introduced by one level of a [`Scope`].
#[derive(Clone, Copy)]
enum Frame<'a> {
    /// The user supplied [`Context`].
    Root(&'a Context),
    /// One element of a sequence.
    Item { this: &'a Value, index: usize },
    /// One entry of a mapping.
    Entry { this: &'a Value, key: &'a str },
}

impl<'a> Frame<'a> {
    /// Return what the name is bound to in this frame alone.
    fn get(self, name: &str) -> Option<Resolved<'a>> {
        match (self, name) {
            (Frame::Root(context), _) => context.binding(name).map(|binding| match binding {
                Binding::Value(value) => Resolved::Value(Cow::Borrowed(value)),
                Binding::Helper(helper) => Resolved::Helper(helper.as_ref()),
            }),
            (Frame::Item { this, .. } | Frame::Entry { this, .. }, THIS) => {
                Some(Resolved::Value(Cow::Borrowed(this)))
            }
            (Frame::Item { index, .. }, INDEX) => Some(Resolved::Value(Cow::Owned(index.into()))),
            (Frame::Entry { key, .. }, KEY) => Some(Resolved::Value(Cow::Owned(key.into()))),
            _ => None,
        }
    }
}

/// A chain of bindings, innermost first.
///
/// The root holds the [`Context`], and every iteration of an "each" block
/// adds a level on top of the scope it was rendered in. Names are looked up
/// from the innermost level outward, so loop bindings shadow outer ones
/// while everything else stays visible.
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    frame: Frame<'a>,
}

impl<'a> Scope<'a> {
    /// Create the outermost [`Scope`] over the given [`Context`].
    pub fn root(context: &'a Context) -> Self {
        Self {
            parent: None,
            frame: Frame::Root(context),
        }
    }

    /// Create a [`Scope`] for one element of a sequence.
    pub fn item(parent: &'a Scope<'a>, this: &'a Value, index: usize) -> Self {
        Self {
            parent: Some(parent),
            frame: Frame::Item { this, index },
        }
    }

    /// Create a [`Scope`] for one entry of a mapping.
    pub fn entry(parent: &'a Scope<'a>, key: &'a str, this: &'a Value) -> Self {
        Self {
            parent: Some(parent),
            frame: Frame::Entry { this, key },
        }
    }

    /// Return the innermost binding for the name.
    pub fn lookup(&self, name: &str) -> Option<Resolved<'a>> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(resolved) = current.frame.get(name) {
                return Some(resolved);
            }
            scope = current.parent;
        }

        None
    }
}
