// src/compose/mod.rs
//! Left-to-right function application.
//!
//! None of this knows about [`crate::Maybe`]: a stage that returns one hands
//! the wrapper itself to the next stage, so fallible stages are chained with
//! `bind` instead.

pub mod curry;

pub type Transformer<T> = Box<dyn Fn(T) -> T>;

/// Thread `initial` through `functions` in order.
pub fn pipe<T>(initial: T, functions: &[&dyn Fn(T) -> T]) -> T {
    functions.iter().fold(initial, |value, f| f(value))
}

/// One transformer that runs each of `transformers` in order.
pub fn compose<T: 'static>(transformers: Vec<Transformer<T>>) -> Transformer<T> {
    Box::new(move |input| transformers.iter().fold(input, |acc, f| f(acc)))
}

/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Unlike [`pipe`], each stage may change
/// the type of the value.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $stage:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($stage)($value) $(, $rest)*)
    };
}
