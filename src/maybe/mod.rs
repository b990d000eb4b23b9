use crate::error::PipelineError;

/// Values that can sit inside a present [`Maybe`].
///
/// Empty strings, empty vectors, NaN, `false` and `None` are falsy.
///
/// Unlike JavaScript falsiness, `0` and `0.0` are truthy: a score average of
/// zero is a real result and must be able to sit in a present `Maybe`.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        !self.is_nan()
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !self.is_nan()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Either a present value or an absence that may carry the reason it failed.
///
/// The variants can be matched (with brace patterns and a trailing `..`) but only built inside
/// this crate, so every present value goes through [`Maybe::some`] or
/// [`Maybe::from_value`] and is truthy.
///
/// ```compile_fail
/// use csvpipe::Maybe;
///
/// let nan: Maybe<f64> = Maybe::Present(f64::NAN);
/// ```
///
/// ```
/// use csvpipe::Maybe;
///
/// let average: Maybe<f64> = Maybe::some(20.0);
/// match average {
///     Maybe::Present { 0: value, .. } => assert_eq!(value, 20.0),
///     Maybe::Absent { .. } => unreachable!(),
/// }
/// ```
#[derive(Debug)]
pub enum Maybe<T, E = PipelineError> {
    #[non_exhaustive]
    Present(T),
    #[non_exhaustive]
    Absent(Option<E>),
}

impl<T: Truthy, E> Maybe<T, E> {
    /// Wrap a value that is known to be there.
    ///
    /// # Panics
    ///
    /// Panics if `value` is falsy.
    pub fn some(value: T) -> Self {
        assert!(value.is_truthy(), "Provided value must not be empty");
        Maybe::Present(value)
    }

    /// Present if `value` is truthy, otherwise absent with no reason.
    pub fn from_value(value: T) -> Self {
        if value.is_truthy() {
            Maybe::Present(value)
        } else {
            Maybe::Absent(None)
        }
    }
}

impl<T, E> Maybe<T, E> {
    pub fn none(reason: E) -> Self {
        Maybe::Absent(Some(reason))
    }

    pub fn empty() -> Self {
        Maybe::Absent(None)
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Feed the held value into the next fallible stage.
    ///
    /// An absent container short-circuits: `f` is never called and the
    /// original reason moves into the result untouched.
    pub fn bind<R, F>(self, f: F) -> Maybe<R, E>
    where
        F: FnOnce(T) -> Maybe<R, E>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent(reason) => Maybe::Absent(reason),
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent(_) => None,
        }
    }

    /// The held value, or nothing when no fallback is given.
    pub fn value(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent(_) => None,
        }
    }

    pub fn value_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Reason for the absence. Always `None` for a present container.
    pub fn reason(&self) -> Option<&E> {
        match self {
            Maybe::Present(_) => None,
            Maybe::Absent(reason) => reason.as_ref(),
        }
    }

    pub fn into_result(self) -> Result<T, Option<E>> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent(reason) => Err(reason),
        }
    }
}

impl<T: Truthy, E> From<Result<T, E>> for Maybe<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Maybe::from_value(value),
            Err(err) => Maybe::none(err),
        }
    }
}
