//! Pending error type carried through handler chains and boundaries.
//!
//! [`WrappedError`] keeps the original error untouched as its *core* and
//! stacks message layers on top of it. Predicates such as [`is`](crate::is)
//! compare against the core, so layers added by [`message`](fn@crate::message)
//! or [`wrap`](fn@crate::wrap) never hide the original cause.

use core::fmt::{self, Display};

use crate::types::alloc_type::Cow;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator placed between a layer's text and the error it wraps.
pub const LAYER_SEPARATOR: &str = " - error: ";

/// Which handler flavor produced a [`Layer`].
///
/// Both flavors render identically; the kind is kept for introspection only.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Added by [`message`](fn@crate::message).
    Message,
    /// Added by [`wrap`](fn@crate::wrap).
    Wrap,
}

/// A single message stacked on top of the core error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    kind: LayerKind,
    text: Cow<'static, str>,
}

impl Layer {
    /// Creates a layer of the given kind.
    ///
    /// ```
    /// use errless::{Layer, LayerKind};
    ///
    /// let layer = Layer::new(LayerKind::Wrap, "loading config");
    /// assert_eq!(layer.kind(), LayerKind::Wrap);
    /// assert_eq!(layer.text(), "loading config");
    /// ```
    #[inline]
    pub fn new(kind: LayerKind, text: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Whether the layer was pushed by a message or a wrap handler.
    #[inline]
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// The layer's text, without separator.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Layer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Error wrapper that stores the original error plus the message layers
/// added while it travelled through handler chains.
///
/// # Examples
///
/// ```
/// use errless::{LayerKind, WrappedError};
///
/// let err = WrappedError::new("connection refused")
///     .with_message("dialing db")
///     .with_wrap("loading users");
///
/// assert_eq!(
///     err.to_string(),
///     "loading users - error: dialing db - error: connection refused"
/// );
/// assert_eq!(err.layers()[0].kind(), LayerKind::Message);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedError<E> {
    pub(crate) core_error: E,
    pub(crate) layers: ErrorVec<Layer>,
}

impl<E> WrappedError<E> {
    /// Creates a wrapped error without any layers.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { core_error: error, layers: ErrorVec::new() }
    }

    /// Pushes a layer on top of the current ones.
    #[inline]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Pushes a [`LayerKind::Message`] layer.
    #[inline]
    pub fn with_message(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.with_layer(Layer::new(LayerKind::Message, text))
    }

    /// Pushes a [`LayerKind::Wrap`] layer.
    #[inline]
    pub fn with_wrap(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.with_layer(Layer::new(LayerKind::Wrap, text))
    }

    /// Returns a reference to the original error.
    #[inline]
    pub fn core_error(&self) -> &E {
        &self.core_error
    }

    /// Consumes the wrapper, returning the original error.
    #[inline]
    pub fn into_core(self) -> E {
        self.core_error
    }

    /// Layers in insertion order (oldest first).
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layers from the most recent to the oldest, the order they render in.
    #[inline]
    pub fn layers_iter(&self) -> core::iter::Rev<core::slice::Iter<'_, Layer>> {
        self.layers.iter().rev()
    }

    /// Maps the core error type while preserving the layers.
    #[inline]
    pub fn map_core<F, T>(self, f: F) -> WrappedError<T>
    where
        F: FnOnce(E) -> T,
    {
        WrappedError { core_error: f(self.core_error), layers: self.layers }
    }
}

impl<E: Display> Display for WrappedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Error: {}", self.core_error)?;
            if !self.layers.is_empty() {
                f.write_str("\nMessages:")?;
                for layer in self.layers_iter() {
                    write!(f, "\n  - {}", layer)?;
                }
            }
            return Ok(());
        }

        for layer in self.layers_iter() {
            Display::fmt(layer, f)?;
            f.write_str(LAYER_SEPARATOR)?;
        }
        Display::fmt(&self.core_error, f)
    }
}

impl<E> core::error::Error for WrappedError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.core_error)
    }
}

