use crate::{
    helper::Helper,
    log::{Error, INVALID_CONTEXT},
};
use serde::Serialize;
use serde_json::{to_value, Value};
use std::{collections::HashMap, fmt::Debug};

/// Something bound to a name in a [`Context`].
pub(crate) enum Binding {
    /// Plain data.
    Value(Value),
    /// A callable helper.
    Helper(Box<dyn Helper>),
}

/// Provides storage for the data and helpers that a template can be
/// rendered with.
///
/// Values and helpers share one namespace, so inserting under a name
/// replaces whatever was bound to it before.
#[derive(Default)]
pub struct Context {
    data: HashMap<String, Binding>,
}

impl Context {
    /// Create a new [`Context`].
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let context = Context::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Create a [`Context`] from a JSON object, binding each of its members.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the value is not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::{helper::serde::json, Context};
    ///
    /// let context = Context::from_value(json!({"title": "Hello"})).unwrap();
    /// assert_eq!(context.get("title"), Some(&json!("Hello")));
    ///
    /// assert!(Context::from_value(json!(["not", "an", "object"])).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(object) => Ok(Self {
                data: object
                    .into_iter()
                    .map(|(key, value)| (key, Binding::Value(value)))
                    .collect(),
            }),
            other => Err(Error::build(INVALID_CONTEXT).with_help(format!(
                "a context must be built from an object, received `{other}`"
            ))),
        }
    }

    /// Inserts a key-value pair into the [`Context`].
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let mut context = Context::new();
    /// let result = context.insert("name", "taylor");
    ///
    /// assert!(result.is_ok());
    /// ```
    pub fn insert<S, T>(&mut self, key: S, value: T) -> Result<(), Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        let key = key.into();
        let value = to_value(value).map_err(|e| {
            Error::build(INVALID_CONTEXT)
                .with_help(format!("value for `{key}` is unserializable: {e}"))
        })?;
        self.data.insert(key, Binding::Value(value));

        Ok(())
    }

    /// Inserts a key-value pair into the [`Context`].
    ///
    /// # Panics
    ///
    /// Panics if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let mut context = Context::new();
    /// context.insert_must("name", "taylor");
    /// ```
    #[inline]
    pub fn insert_must<S, T>(&mut self, key: S, value: T)
    where
        S: Into<String>,
        T: Serialize,
    {
        if let Err(error) = self.insert(key, value) {
            panic!("{error:#}");
        }
    }

    /// Inserts a key-value pair into the [`Context`].
    ///
    /// Returns the `Context`, so additional methods may be chained.
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let context = Context::new().with("name", "taylor");
    ///
    /// assert!(context.is_ok());
    /// ```
    #[inline]
    pub fn with<S, T>(mut self, key: S, value: T) -> Result<Self, Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert(key, value)?;

        Ok(self)
    }

    /// Inserts a key-value pair into the [`Context`].
    ///
    /// Returns the `Context`, so additional methods may be chained.
    ///
    /// # Panics
    ///
    /// Panics if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let context = Context::new().with_must("name", "taylor");
    /// ```
    #[inline]
    pub fn with_must<S, T>(mut self, key: S, value: T) -> Self
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert_must(key, value);

        self
    }

    /// Bind a [`Helper`] to the given name.
    #[inline]
    pub fn insert_helper<S, H>(&mut self, key: S, helper: H)
    where
        S: Into<String>,
        H: Helper + 'static,
    {
        self.data.insert(key.into(), Binding::Helper(Box::new(helper)));
    }

    /// Bind a [`Helper`] to the given name.
    ///
    /// Returns the `Context`, so additional methods may be chained.
    #[inline]
    pub fn with_helper<S, H>(mut self, key: S, helper: H) -> Self
    where
        S: Into<String>,
        H: Helper + 'static,
    {
        self.insert_helper(key, helper);

        self
    }

    /// Returns a reference to the [`Value`] bound to the key, if the
    /// binding is not a helper.
    ///
    /// # Examples
    ///
    /// ```
    /// use brace::Context;
    ///
    /// let context = Context::new().with_must("name", "taylor");
    /// let result = context.get("name");
    ///
    /// assert_eq!(result.unwrap(), "taylor");
    /// ```
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.data.get(key) {
            Some(Binding::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the [`Helper`] bound to the key, if any.
    #[inline]
    pub fn get_helper(&self, key: &str) -> Option<&dyn Helper> {
        match self.data.get(key) {
            Some(Binding::Helper(helper)) => Some(helper.as_ref()),
            _ => None,
        }
    }

    /// Returns true if anything is bound to the key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns the binding for the key.
    #[inline]
    pub(crate) fn binding(&self, key: &str) -> Option<&Binding> {
        self.data.get(key)
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (key, binding) in &self.data {
            match binding {
                Binding::Value(value) => map.entry(key, value),
                Binding::Helper(_) => map.entry(key, &"<helper>"),
            };
        }
        map.finish()
    }
}
