//! Higher-order transforms between binary functions and chains of unary ones.
//!
//! - [`partial1`] fixes the first argument of a binary function
//! - [`curry`] turns `Fn(A, B) -> C` into `Fn(A) -> Fn(B) -> C`
//! - [`uncurry`] turns `Fn(A) -> Fn(B) -> C` back into `Fn(A, B) -> C`
//!
//! `curry` and `uncurry` are inverses: `uncurry(curry(f))` behaves like `f`,
//! and `curry(uncurry(g))` behaves like `g`.

use std::rc::Rc;

/// The unary function returned by applying a curried function to its first
/// argument.
pub type Curried<'f, B, C> = Box<dyn Fn(B) -> C + 'f>;

/// Fixes the first argument of `f`, returning `b -> f(a, b)`.
///
/// `a` is moved into the returned closure when `partial1` is called. Each
/// call passes `f` a clone of that captured value.
///
/// # Example
///
/// ```
/// use fpbasics::partial1;
///
/// let greet = partial1(String::from("hello"), |greeting: String, name: &str| {
///     format!("{greeting}, {name}")
/// });
///
/// assert_eq!(greet("world"), "hello, world");
/// assert_eq!(greet("rust"), "hello, rust");
/// ```
pub fn partial1<A, B, C, F>(a: A, f: F) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |b: B| f(a.clone(), b)
}

/// Converts a binary function into a chain of two unary functions, so that
/// `curry(f)(a)(b) == f(a, b)`.
///
/// All partial applications share `f`, so it does not need to be `Clone`.
///
/// # Example
///
/// ```
/// use fpbasics::curry;
///
/// let add = curry(|a: i32, b: i32| a + b);
/// let add_five = add(5);
///
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add(1)(1), 2);
/// ```
pub fn curry<'f, A, B, C, F>(f: F) -> impl Fn(A) -> Curried<'f, B, C>
where
    A: Clone + 'f,
    B: 'f,
    C: 'f,
    F: Fn(A, B) -> C + 'f,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<'f, B, C> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Converts a chain of two unary functions into a binary function, so that
/// `uncurry(f)(a, b) == f(a)(b)`.
///
/// # Example
///
/// ```
/// use fpbasics::uncurry;
///
/// let mul = uncurry(|a: i32| move |b: i32| a * b);
/// assert_eq!(mul(6, 7), 42);
/// ```
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a: A, b: B| f(a)(b)
}
