use std::ops::{Add, Mul, Sub};

/// `add(a)(b) == a + b`
pub fn add<T>(a: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Copy,
{
    move |b| a + b
}

/// `subtract(a)(b) == b - a`: the partially applied amount is taken away.
pub fn subtract<T>(a: T) -> impl Fn(T) -> T
where
    T: Sub<Output = T> + Copy,
{
    move |b| b - a
}

/// `multiply(a)(b) == a * b`
pub fn multiply<T>(a: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |b| a * b
}
